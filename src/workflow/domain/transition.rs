//! Transitions between statuses and the tasks that gate them.

use super::{ParseEndpointError, StatusId, TaskId, TransitionId};
use serde::{Deserialize, Serialize};

/// Which end of a transition an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// The source status.
    From,
    /// The target status.
    To,
}

impl Endpoint {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
        }
    }
}

impl TryFrom<&str> for Endpoint {
    type Error = ParseEndpointError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "from" => Ok(Self::From),
            "to" => Ok(Self::To),
            _ => Err(ParseEndpointError(value.to_owned())),
        }
    }
}

/// Directed edge between two statuses, gated by tasks of the source status.
///
/// Endpoints are `None` until chosen. They may also name a status that has
/// since been deleted; such references are resolved at read time and simply
/// fail to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    id: TransitionId,
    from: Option<StatusId>,
    to: Option<StatusId>,
    required_tasks: Vec<TaskId>,
}

impl Transition {
    /// Creates a transition with empty endpoints and no required tasks.
    #[must_use]
    pub const fn new(id: TransitionId) -> Self {
        Self {
            id,
            from: None,
            to: None,
            required_tasks: Vec::new(),
        }
    }

    /// Sets both endpoints and the initial required tasks.
    ///
    /// Duplicate task identifiers are collapsed, keeping first occurrence.
    #[must_use]
    pub fn between(
        mut self,
        from: Option<StatusId>,
        to: Option<StatusId>,
        required_tasks: impl IntoIterator<Item = TaskId>,
    ) -> Self {
        self.from = from;
        self.to = to;
        self.reseed_required_tasks(required_tasks);
        self
    }

    /// Returns the transition identifier.
    #[must_use]
    pub const fn id(&self) -> TransitionId {
        self.id
    }

    /// Returns the source status, if one was chosen.
    #[must_use]
    pub const fn from(&self) -> Option<StatusId> {
        self.from
    }

    /// Returns the target status, if one was chosen.
    #[must_use]
    pub const fn to(&self) -> Option<StatusId> {
        self.to
    }

    /// Returns the endpoint selected by `which`.
    #[must_use]
    pub const fn endpoint(&self, which: Endpoint) -> Option<StatusId> {
        match which {
            Endpoint::From => self.from,
            Endpoint::To => self.to,
        }
    }

    /// Returns the required task identifiers in the order they were added.
    #[must_use]
    pub fn required_tasks(&self) -> &[TaskId] {
        &self.required_tasks
    }

    /// Returns `true` when `task_id` gates this transition.
    #[must_use]
    pub fn requires(&self, task_id: TaskId) -> bool {
        self.required_tasks.contains(&task_id)
    }

    /// Returns `true` when at least one task gates this transition.
    #[must_use]
    pub fn is_gated(&self) -> bool {
        !self.required_tasks.is_empty()
    }

    /// Points the source at `status_id` and replaces the required tasks with
    /// `source_tasks`, the tasks of the new source status.
    pub(crate) fn set_source(
        &mut self,
        status_id: Option<StatusId>,
        source_tasks: impl IntoIterator<Item = TaskId>,
    ) {
        self.from = status_id;
        self.reseed_required_tasks(source_tasks);
    }

    /// Points the target at `status_id`. Required tasks are left untouched.
    pub(crate) const fn set_target(&mut self, status_id: Option<StatusId>) {
        self.to = status_id;
    }

    /// Removes `task_id` when present, otherwise appends it.
    pub(crate) fn toggle_required_task(&mut self, task_id: TaskId) {
        if let Some(position) = self.required_tasks.iter().position(|id| *id == task_id) {
            self.required_tasks.remove(position);
        } else {
            self.required_tasks.push(task_id);
        }
    }

    fn reseed_required_tasks(&mut self, task_ids: impl IntoIterator<Item = TaskId>) {
        self.required_tasks.clear();
        for task_id in task_ids {
            if !self.required_tasks.contains(&task_id) {
                self.required_tasks.push(task_id);
            }
        }
    }
}
