//! Shared world state for workflow editing BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use leadflow::workflow::{
    adapters::SequentialIdSource,
    domain::{StatusId, Task, TaskId, Transition, TransitionId},
    services::WorkflowEditor,
};
use rstest::fixture;

/// Editor type used by the BDD world.
pub type TestEditor = WorkflowEditor<SequentialIdSource>;

/// Scenario world for workflow editing behaviour tests.
pub struct EditorWorld {
    pub editor: TestEditor,
    pub statuses: HashMap<String, StatusId>,
    pub transition: Option<TransitionId>,
    pub deleted_task: Option<TaskId>,
}

impl EditorWorld {
    /// Creates a world with an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: WorkflowEditor::new(Arc::new(SequentialIdSource::new())),
            statuses: HashMap::new(),
            transition: None,
            deleted_task: None,
        }
    }

    /// Looks up a status created earlier in the scenario.
    pub fn status_id(&self, name: &str) -> Result<StatusId, eyre::Report> {
        self.statuses
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no status named '{name}' in scenario world"))
    }

    /// Looks up a task of a status by name.
    pub fn task_id(&self, status: StatusId, name: &str) -> Result<TaskId, eyre::Report> {
        self.editor
            .tasks_of(status)
            .iter()
            .find(|task| task.name() == name)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("status has no task named '{name}'"))
    }

    /// Returns the transition created in the scenario.
    pub fn transition(&self) -> Result<&Transition, eyre::Report> {
        self.transition
            .and_then(|id| self.editor.transition(id))
            .ok_or_else(|| eyre::eyre!("missing transition in scenario world"))
    }
}

impl Default for EditorWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits a comma-separated list of names.
#[must_use]
pub fn names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EditorWorld {
    EditorWorld::default()
}
