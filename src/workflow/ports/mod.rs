//! Port contracts for workflow editing.
//!
//! Ports define the seams between the workflow model and its surroundings:
//! where fresh identifiers come from and who draws the derived graph.

pub mod id_source;
pub mod renderer;

pub use id_source::IdSource;
pub use renderer::{GraphRenderError, GraphRenderResult, GraphRenderer};
