//! Lead workflow editing.
//!
//! A lead workflow is a set of named statuses, tasks attached to each status,
//! and transitions between statuses gated by a subset of the source status's
//! tasks. This module owns that model and every edit to it, and derives the
//! node/edge graph that renderers draw. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Editing services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
