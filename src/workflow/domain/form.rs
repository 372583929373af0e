//! Read-side views for the transition editing form.

use super::{Status, Task, Transition, TransitionId, WorkflowDefinition};

/// One checkbox in a transition's task checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskChoice<'a> {
    /// Candidate task from the source status.
    pub task: &'a Task,
    /// Whether the transition currently requires it.
    pub checked: bool,
}

/// A transition with its references resolved against the current statuses.
///
/// Empty or dangling endpoints resolve to `None`, which a form shows as an
/// unselected control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionForm<'a> {
    /// The transition being edited.
    pub transition: &'a Transition,
    /// Resolved source status.
    pub source: Option<&'a Status>,
    /// Resolved target status.
    pub target: Option<&'a Status>,
    /// Tasks of the source status, each flagged when required.
    pub choices: Vec<TaskChoice<'a>>,
}

impl<'a> TransitionForm<'a> {
    /// Resolves `transition` against `definition`.
    #[must_use]
    pub fn resolve(definition: &'a WorkflowDefinition, transition: &'a Transition) -> Self {
        let source = transition.from().and_then(|id| definition.status(id));
        let target = transition.to().and_then(|id| definition.status(id));
        let choices = source
            .map(Status::tasks)
            .unwrap_or_default()
            .iter()
            .map(|task| TaskChoice {
                task,
                checked: transition.requires(task.id()),
            })
            .collect();

        Self {
            transition,
            source,
            target,
            choices,
        }
    }

    /// Returns the transition identifier.
    #[must_use]
    pub const fn id(&self) -> TransitionId {
        self.transition.id()
    }

    /// Names of required tasks that still exist in the source status, in
    /// source order. Stale task identifiers contribute nothing.
    #[must_use]
    pub fn required_task_names(&self) -> Vec<&'a str> {
        self.choices
            .iter()
            .filter(|choice| choice.checked)
            .map(|choice| choice.task.name())
            .collect()
    }

    /// Returns `true` when a required task no longer resolves in the source.
    #[must_use]
    pub fn has_stale_requirements(&self) -> bool {
        self.transition.required_tasks().iter().any(|task_id| {
            !self
                .choices
                .iter()
                .any(|choice| choice.task.id() == *task_id)
        })
    }
}

impl WorkflowDefinition {
    /// Resolves a transition for display in the editing form.
    #[must_use]
    pub fn transition_form(&self, id: TransitionId) -> Option<TransitionForm<'_>> {
        self.transition(id)
            .map(|transition| TransitionForm::resolve(self, transition))
    }
}
