//! Error types for parsing workflow domain values.

use super::{StatusId, TaskId, TransitionId};
use thiserror::Error;

/// Error returned while parsing a transition endpoint selector.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown transition endpoint '{0}', expected 'from' or 'to'")]
pub struct ParseEndpointError(pub String);

/// Error returned when a serialized definition reuses an identifier.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DefinitionError {
    /// Two statuses share an identifier.
    #[error("status id {0} appears more than once")]
    DuplicateStatusId(StatusId),
    /// Two tasks share an identifier, within one status or across statuses.
    #[error("task id {0} appears more than once")]
    DuplicateTaskId(TaskId),
    /// Two transitions share an identifier.
    #[error("transition id {0} appears more than once")]
    DuplicateTransitionId(TransitionId),
}
