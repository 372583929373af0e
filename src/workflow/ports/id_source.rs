//! Source of fresh identifiers for new statuses, tasks, and transitions.

use crate::workflow::domain::{StatusId, TaskId, TransitionId};
use uuid::Uuid;

/// Identifier generation contract.
///
/// Implementations must never hand out the same UUID twice during their
/// lifetime; the editor relies on this for identifier uniqueness.
pub trait IdSource: Send + Sync {
    /// Returns a UUID not previously returned by this source.
    fn next_uuid(&self) -> Uuid;

    /// Returns a fresh status identifier.
    fn next_status_id(&self) -> StatusId {
        StatusId::from_uuid(self.next_uuid())
    }

    /// Returns a fresh task identifier.
    fn next_task_id(&self) -> TaskId {
        TaskId::from_uuid(self.next_uuid())
    }

    /// Returns a fresh transition identifier.
    fn next_transition_id(&self) -> TransitionId {
        TransitionId::from_uuid(self.next_uuid())
    }
}
