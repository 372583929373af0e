//! Step definitions for workflow editing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
