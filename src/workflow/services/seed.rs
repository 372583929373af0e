//! Seeding an editor from a named, configuration-friendly workflow outline.
//!
//! Seeds refer to statuses and tasks by name. Unlike the editing operations,
//! seeding validates its input: a seed is authored up front, so a name that
//! does not resolve is a mistake worth reporting.

use super::WorkflowEditor;
use crate::workflow::{
    domain::{StatusId, Task, TaskId},
    ports::IdSource,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Status entry of a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedStatus {
    /// Status name, unique within the seed.
    pub name: String,
    /// Task names in display order, unique within the status.
    pub tasks: Vec<String>,
}

impl SeedStatus {
    /// Creates a status entry.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Sets the task names.
    #[must_use]
    pub fn with_tasks<S: Into<String>>(mut self, tasks: impl IntoIterator<Item = S>) -> Self {
        self.tasks = tasks.into_iter().map(Into::into).collect();
        self
    }
}

/// Transition entry of a seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedTransition {
    /// Source status name; blank leaves the source empty.
    pub from: String,
    /// Target status name; blank leaves the target empty.
    pub to: String,
    /// Names of required tasks of the source status. `None` requires every
    /// task of the source.
    pub required: Option<Vec<String>>,
}

impl SeedTransition {
    /// Creates a transition entry requiring every task of `from`.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            required: None,
        }
    }

    /// Restricts the required tasks to the given names.
    #[must_use]
    pub fn requiring<S: Into<String>>(mut self, tasks: impl IntoIterator<Item = S>) -> Self {
        self.required = Some(tasks.into_iter().map(Into::into).collect());
        self
    }
}

/// Named outline of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowSeed {
    /// Statuses in display order.
    pub statuses: Vec<SeedStatus>,
    /// Transitions in display order.
    pub transitions: Vec<SeedTransition>,
}

impl WorkflowSeed {
    /// The sample lead workflow: "New" (tasks "Email Sent" and "Follow-up
    /// Call"), "In Progress" (task "Proposal Sent") and "Closed" (no tasks),
    /// without transitions.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            statuses: vec![
                SeedStatus::new("New").with_tasks(["Email Sent", "Follow-up Call"]),
                SeedStatus::new("In Progress").with_tasks(["Proposal Sent"]),
                SeedStatus::new("Closed"),
            ],
            transitions: Vec::new(),
        }
    }

    /// Returns `true` when the seed lists nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty() && self.transitions.is_empty()
    }

    /// Checks that status names, and task names within each status, are
    /// unique. Blank status names are exempt since nothing can refer to them.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateStatusName`] or
    /// [`SeedError::DuplicateTaskName`] on the first repeat found.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut status_names = HashSet::new();
        for status in &self.statuses {
            let status_name = status.name.trim();
            if !status_name.is_empty() && !status_names.insert(status_name) {
                return Err(SeedError::DuplicateStatusName(status_name.to_owned()));
            }
            let mut task_names = HashSet::new();
            for task in &status.tasks {
                if !task_names.insert(task.trim()) {
                    return Err(SeedError::DuplicateTaskName {
                        status: status_name.to_owned(),
                        task: task.trim().to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Errors returned while seeding an editor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedError {
    /// Two statuses share a name.
    #[error("duplicate status name '{0}'")]
    DuplicateStatusName(String),

    /// A status lists the same task name twice.
    #[error("status '{status}' lists task '{task}' more than once")]
    DuplicateTaskName {
        /// Owning status name.
        status: String,
        /// Repeated task name.
        task: String,
    },

    /// A transition names a status the seed does not define.
    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    /// A transition requires a task its source status does not own.
    #[error("status '{status}' has no task '{task}'")]
    UnknownTask {
        /// Source status name.
        status: String,
        /// Missing task name.
        task: String,
    },

    /// A transition lists required tasks but has no source status.
    #[error("transition to '{to}' requires tasks but has no source status")]
    RequiredTasksWithoutSource {
        /// Target status name, possibly blank.
        to: String,
    },
}

impl<I> WorkflowEditor<I>
where
    I: IdSource,
{
    /// Creates an editor holding the statuses and transitions of `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] when names repeat or fail to resolve. No editor
    /// is produced in that case.
    pub fn from_seed(seed: &WorkflowSeed, ids: Arc<I>) -> Result<Self, SeedError> {
        seed.validate()?;
        let mut editor = Self::new(ids);

        let mut status_ids: HashMap<&str, StatusId> = HashMap::new();
        for status in &seed.statuses {
            let task_names: Vec<&str> = status.tasks.iter().map(|task| task.trim()).collect();
            let status_name = status.name.trim();
            let status_id = editor.insert_named_status(status_name, &task_names);
            status_ids.insert(status_name, status_id);
        }

        for transition in &seed.transitions {
            let from = resolve_status(&status_ids, &transition.from)?;
            let to = resolve_status(&status_ids, &transition.to)?;
            let required = editor.resolve_required(transition, from)?;
            editor.insert_transition(from, to, required);
        }

        debug!(
            statuses = editor.statuses().len(),
            transitions = editor.transitions().len(),
            "seeded workflow editor"
        );
        Ok(editor)
    }

    fn resolve_required(
        &self,
        transition: &SeedTransition,
        from: Option<StatusId>,
    ) -> Result<Vec<TaskId>, SeedError> {
        let source_tasks = from.map(|id| self.tasks_of(id)).unwrap_or_default();
        let Some(names) = &transition.required else {
            return Ok(source_tasks.iter().map(Task::id).collect());
        };
        if from.is_none() && !names.is_empty() {
            return Err(SeedError::RequiredTasksWithoutSource {
                to: transition.to.trim().to_owned(),
            });
        }
        names
            .iter()
            .map(|name| {
                source_tasks
                    .iter()
                    .find(|task| task.name() == name.trim())
                    .map(Task::id)
                    .ok_or_else(|| SeedError::UnknownTask {
                        status: transition.from.trim().to_owned(),
                        task: name.trim().to_owned(),
                    })
            })
            .collect()
    }
}

fn resolve_status(
    status_ids: &HashMap<&str, StatusId>,
    name: &str,
) -> Result<Option<StatusId>, SeedError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    status_ids
        .get(trimmed)
        .copied()
        .map(Some)
        .ok_or_else(|| SeedError::UnknownStatus(trimmed.to_owned()))
}
