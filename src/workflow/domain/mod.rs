//! Domain model for lead workflow definitions.
//!
//! A workflow is a list of statuses, each owning an ordered list of tasks,
//! plus transitions between statuses gated by tasks of the source status.
//! The model edits a definition; it does not run one.

mod definition;
mod error;
mod form;
mod graph;
mod ids;
mod status;
mod transition;

pub use definition::WorkflowDefinition;
pub use error::{DefinitionError, ParseEndpointError};
pub use form::{TaskChoice, TransitionForm};
pub use graph::{EdgeLabel, GraphEdge, GraphNode, WorkflowGraph, node_label};
pub use ids::{StatusId, TaskId, TransitionId};
pub use status::{Status, Task};
pub use transition::{Endpoint, Transition};
