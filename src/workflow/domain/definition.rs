//! The workflow definition aggregate: statuses and transitions.

use super::{
    DefinitionError, Endpoint, Status, StatusId, Task, TaskId, Transition, TransitionId,
    WorkflowGraph,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Canonical collections of a lead workflow.
///
/// Every mutation that names an unknown identifier leaves the definition
/// unchanged and reports that through its return value; nothing here fails.
/// Deleting a status keeps transitions that point at it, and deleting a task
/// keeps it in any transition's required tasks. Readers resolve such dangling
/// references to nothing.
///
/// Deserializing checks the same identifier uniqueness the mutators enforce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionRecord")]
pub struct WorkflowDefinition {
    statuses: Vec<Status>,
    transitions: Vec<Transition>,
}

/// Unchecked serialized form of a [`WorkflowDefinition`].
#[derive(Default, Deserialize)]
#[serde(default)]
struct DefinitionRecord {
    statuses: Vec<Status>,
    transitions: Vec<Transition>,
}

impl TryFrom<DefinitionRecord> for WorkflowDefinition {
    type Error = DefinitionError;

    fn try_from(record: DefinitionRecord) -> Result<Self, Self::Error> {
        let mut definition = Self::new();
        let mut task_ids = HashSet::new();
        for status in record.statuses {
            if definition.status(status.id()).is_some() {
                return Err(DefinitionError::DuplicateStatusId(status.id()));
            }
            if let Some(task_id) = status.task_ids().find(|task_id| !task_ids.insert(*task_id)) {
                return Err(DefinitionError::DuplicateTaskId(task_id));
            }
            definition.statuses.push(status);
        }
        for transition in record.transitions {
            let id = transition.id();
            if !definition.add_transition(transition) {
                return Err(DefinitionError::DuplicateTransitionId(id));
            }
        }
        Ok(definition)
    }
}

impl WorkflowDefinition {
    /// Creates an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the statuses in insertion order.
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Returns the transitions in insertion order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Looks up a status.
    #[must_use]
    pub fn status(&self, id: StatusId) -> Option<&Status> {
        self.statuses.iter().find(|status| status.id() == id)
    }

    /// Looks up a transition.
    #[must_use]
    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|transition| transition.id() == id)
    }

    /// Returns the tasks of a status, or an empty slice when it is unknown.
    #[must_use]
    pub fn tasks_of(&self, id: StatusId) -> &[Task] {
        self.status(id).map(Status::tasks).unwrap_or_default()
    }

    /// Returns `true` when any status currently owns `task_id`.
    #[must_use]
    pub fn contains_task(&self, task_id: TaskId) -> bool {
        self.statuses
            .iter()
            .any(|status| status.task(task_id).is_some())
    }

    /// Appends a status.
    ///
    /// Returns `false`, leaving the definition unchanged, when the status
    /// identifier or one of its task identifiers is already taken.
    pub fn add_status(&mut self, status: Status) -> bool {
        let id_taken = self.status(status.id()).is_some();
        let task_taken = status.task_ids().any(|task_id| self.contains_task(task_id));
        if id_taken || task_taken {
            return false;
        }
        self.statuses.push(status);
        true
    }

    /// Removes a status. Transitions referencing it are kept.
    pub fn delete_status(&mut self, id: StatusId) -> Option<Status> {
        let position = self.statuses.iter().position(|status| status.id() == id)?;
        Some(self.statuses.remove(position))
    }

    /// Renames a status. Any string is accepted, including an empty one.
    pub fn rename_status(&mut self, id: StatusId, name: impl Into<String>) -> bool {
        let Some(status) = self.status_mut(id) else {
            return false;
        };
        status.rename(name.into());
        true
    }

    /// Appends a task to a status.
    ///
    /// Returns `false` when the status is unknown or the task identifier is
    /// already owned by some status.
    pub fn add_task(&mut self, status_id: StatusId, task: Task) -> bool {
        if self.contains_task(task.id()) {
            return false;
        }
        let Some(status) = self.status_mut(status_id) else {
            return false;
        };
        status.push_task(task);
        true
    }

    /// Removes a task from a status.
    ///
    /// Transitions that require the task keep its identifier.
    pub fn delete_task(&mut self, status_id: StatusId, task_id: TaskId) -> Option<Task> {
        self.status_mut(status_id)?.remove_task(task_id)
    }

    /// Renames a task owned by `status_id`.
    pub fn rename_task(
        &mut self,
        status_id: StatusId,
        task_id: TaskId,
        name: impl Into<String>,
    ) -> bool {
        let Some(task) = self
            .status_mut(status_id)
            .and_then(|status| status.task_mut(task_id))
        else {
            return false;
        };
        task.rename(name.into());
        true
    }

    /// Appends a transition.
    ///
    /// Returns `false` when the identifier is already taken.
    pub fn add_transition(&mut self, transition: Transition) -> bool {
        if self.transition(transition.id()).is_some() {
            return false;
        }
        self.transitions.push(transition);
        true
    }

    /// Removes a transition.
    pub fn delete_transition(&mut self, id: TransitionId) -> Option<Transition> {
        let position = self
            .transitions
            .iter()
            .position(|transition| transition.id() == id)?;
        Some(self.transitions.remove(position))
    }

    /// Points one end of a transition at `status_id` (`None` clears it).
    ///
    /// Moving the source re-seeds the required tasks with every task the new
    /// source currently owns, discarding the previous selection. An unknown
    /// or empty source therefore leaves no required tasks. Moving the target
    /// keeps the required tasks.
    pub fn set_transition_endpoint(
        &mut self,
        id: TransitionId,
        which: Endpoint,
        status_id: Option<StatusId>,
    ) -> bool {
        let source_tasks: Vec<TaskId> = match which {
            Endpoint::From => status_id
                .map(|source| self.tasks_of(source).iter().map(Task::id).collect())
                .unwrap_or_default(),
            Endpoint::To => Vec::new(),
        };
        let Some(transition) = self.transition_mut(id) else {
            return false;
        };
        match which {
            Endpoint::From => transition.set_source(status_id, source_tasks),
            Endpoint::To => transition.set_target(status_id),
        }
        true
    }

    /// Adds `task_id` to a transition's required tasks, or removes it when
    /// already present.
    ///
    /// The task is not checked against the transition's source status.
    pub fn toggle_required_task(&mut self, id: TransitionId, task_id: TaskId) -> bool {
        let Some(transition) = self.transition_mut(id) else {
            return false;
        };
        transition.toggle_required_task(task_id);
        true
    }

    /// Derives graph nodes and edges from the current state.
    #[must_use]
    pub fn build_graph(&self) -> WorkflowGraph {
        WorkflowGraph::from_definition(self)
    }

    fn status_mut(&mut self, id: StatusId) -> Option<&mut Status> {
        self.statuses.iter_mut().find(|status| status.id() == id)
    }

    fn transition_mut(&mut self, id: TransitionId) -> Option<&mut Transition> {
        self.transitions
            .iter_mut()
            .find(|transition| transition.id() == id)
    }
}
