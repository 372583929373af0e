//! Adapter implementations for workflow editing ports.

mod id_source;
mod json;

pub use id_source::{RandomIdSource, SequentialIdSource};
pub use json::{JsonGraphRenderer, render_json};
