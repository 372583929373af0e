//! Port for the graph-rendering collaborator.

use crate::workflow::domain::WorkflowGraph;
use std::io;
use thiserror::Error;

/// Result type for graph rendering.
pub type GraphRenderResult<T> = Result<T, GraphRenderError>;

/// Consumer of derived workflow graphs.
///
/// Renderers own layout. The graph they receive has no positions.
pub trait GraphRenderer {
    /// Renders `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphRenderError`] when the graph cannot be encoded or
    /// written.
    fn render(&mut self, graph: &WorkflowGraph) -> GraphRenderResult<()>;
}

/// Errors returned by graph renderers.
#[derive(Debug, Error)]
pub enum GraphRenderError {
    /// Encoding the graph failed.
    #[error("failed to encode workflow graph: {0}")]
    Encode(#[from] serde_json::Error),
    /// Writing the encoded graph failed.
    #[error("failed to write workflow graph: {0}")]
    Write(#[from] io::Error),
}
