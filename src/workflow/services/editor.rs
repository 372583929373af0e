//! Workflow editor service: the single owner and mutator of a definition.

use crate::workflow::{
    adapters::RandomIdSource,
    domain::{
        Endpoint, Status, StatusId, Task, TaskId, Transition, TransitionForm, TransitionId,
        WorkflowDefinition, WorkflowGraph,
    },
    ports::{GraphRenderResult, GraphRenderer, IdSource},
    services::WorkflowSeed,
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Owns a workflow definition and applies editing operations to it.
///
/// Operations run synchronously, one at a time, in response to UI events.
/// Any operation naming an unknown identifier is a logged no-op; none of
/// them fail. Newly created statuses, tasks, and transitions draw their
/// identifiers from the configured [`IdSource`].
#[derive(Debug)]
pub struct WorkflowEditor<I = RandomIdSource>
where
    I: IdSource,
{
    definition: WorkflowDefinition,
    ids: Arc<I>,
}

impl Default for WorkflowEditor<RandomIdSource> {
    fn default() -> Self {
        Self::new(Arc::new(RandomIdSource))
    }
}

impl<I> WorkflowEditor<I>
where
    I: IdSource,
{
    /// Creates an editor over an empty definition.
    #[must_use]
    pub fn new(ids: Arc<I>) -> Self {
        Self::from_definition(WorkflowDefinition::new(), ids)
    }

    /// Creates an editor over an existing definition.
    #[must_use]
    pub const fn from_definition(definition: WorkflowDefinition, ids: Arc<I>) -> Self {
        Self { definition, ids }
    }

    /// Creates an editor preloaded with the sample lead workflow: "New"
    /// (tasks "Email Sent" and "Follow-up Call"), "In Progress" (task
    /// "Proposal Sent") and "Closed" (no tasks), without transitions.
    #[must_use]
    pub fn with_sample_workflow(ids: Arc<I>) -> Self {
        let mut editor = Self::new(ids);
        for status in WorkflowSeed::sample().statuses {
            let task_names: Vec<&str> = status.tasks.iter().map(String::as_str).collect();
            editor.insert_named_status(&status.name, &task_names);
        }
        debug!(
            statuses = editor.definition.statuses().len(),
            "loaded sample workflow"
        );
        editor
    }

    /// Returns the current definition.
    #[must_use]
    pub const fn definition(&self) -> &WorkflowDefinition {
        &self.definition
    }

    /// Consumes the editor, returning its definition.
    #[must_use]
    pub fn into_definition(self) -> WorkflowDefinition {
        self.definition
    }

    /// Returns the statuses in insertion order.
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        self.definition.statuses()
    }

    /// Returns the transitions in insertion order.
    #[must_use]
    pub fn transitions(&self) -> &[Transition] {
        self.definition.transitions()
    }

    /// Looks up a status.
    #[must_use]
    pub fn status(&self, id: StatusId) -> Option<&Status> {
        self.definition.status(id)
    }

    /// Looks up a transition.
    #[must_use]
    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.definition.transition(id)
    }

    /// Returns the tasks of a status, or an empty slice when it is unknown.
    #[must_use]
    pub fn tasks_of(&self, id: StatusId) -> &[Task] {
        self.definition.tasks_of(id)
    }

    /// Appends a status with an empty name and no tasks.
    pub fn add_status(&mut self) -> StatusId {
        self.insert_named_status("", &[])
    }

    /// Removes a status. Transitions pointing at it are kept.
    pub fn delete_status(&mut self, id: StatusId) -> &WorkflowDefinition {
        match self.definition.delete_status(id) {
            Some(removed) => debug!(
                status_id = %id,
                tasks = removed.tasks().len(),
                "deleted status"
            ),
            None => trace!(status_id = %id, "delete ignored: unknown status"),
        }
        &self.definition
    }

    /// Renames a status. Empty names are accepted.
    pub fn rename_status(&mut self, id: StatusId, name: impl Into<String>) -> &WorkflowDefinition {
        if self.definition.rename_status(id, name) {
            debug!(status_id = %id, "renamed status");
        } else {
            trace!(status_id = %id, "rename ignored: unknown status");
        }
        &self.definition
    }

    /// Appends a task with an empty name to a status.
    ///
    /// Returns `None`, changing nothing, when the status is unknown.
    pub fn add_task(&mut self, status_id: StatusId) -> Option<TaskId> {
        if self.definition.status(status_id).is_none() {
            trace!(status_id = %status_id, "add task ignored: unknown status");
            return None;
        }
        let task_id = self.fresh_task_id(&[]);
        if self.definition.add_task(status_id, Task::new(task_id, "")) {
            debug!(status_id = %status_id, task_id = %task_id, "added task");
            Some(task_id)
        } else {
            warn!(task_id = %task_id, "task not added");
            None
        }
    }

    /// Removes a task from a status.
    ///
    /// Transitions requiring the task keep its identifier; readers resolve it
    /// to nothing.
    pub fn delete_task(&mut self, status_id: StatusId, task_id: TaskId) -> &WorkflowDefinition {
        if self.definition.delete_task(status_id, task_id).is_some() {
            debug!(status_id = %status_id, task_id = %task_id, "deleted task");
        } else {
            trace!(status_id = %status_id, task_id = %task_id, "delete ignored: unknown task");
        }
        &self.definition
    }

    /// Renames a task. Empty names are accepted.
    pub fn rename_task(
        &mut self,
        status_id: StatusId,
        task_id: TaskId,
        name: impl Into<String>,
    ) -> &WorkflowDefinition {
        if self.definition.rename_task(status_id, task_id, name) {
            debug!(status_id = %status_id, task_id = %task_id, "renamed task");
        } else {
            trace!(status_id = %status_id, task_id = %task_id, "rename ignored: unknown task");
        }
        &self.definition
    }

    /// Appends a transition with empty endpoints and no required tasks.
    pub fn add_transition(&mut self) -> TransitionId {
        self.insert_transition(None, None, Vec::new())
    }

    /// Appends a transition with both endpoints chosen.
    ///
    /// The required tasks start as every task `from` currently owns, the
    /// same seeding a later change of source would apply.
    pub fn add_transition_between(
        &mut self,
        from: Option<StatusId>,
        to: Option<StatusId>,
    ) -> TransitionId {
        let required: Vec<TaskId> = from
            .map(|source| self.definition.tasks_of(source).iter().map(Task::id).collect())
            .unwrap_or_default();
        self.insert_transition(from, to, required)
    }

    /// Removes a transition.
    pub fn delete_transition(&mut self, id: TransitionId) -> &WorkflowDefinition {
        if self.definition.delete_transition(id).is_some() {
            debug!(transition_id = %id, "deleted transition");
        } else {
            trace!(transition_id = %id, "delete ignored: unknown transition");
        }
        &self.definition
    }

    /// Points one end of a transition at `status_id`; `None` clears it.
    ///
    /// Changing the source resets the required tasks to every task of the
    /// new source.
    pub fn set_transition_endpoint(
        &mut self,
        id: TransitionId,
        which: Endpoint,
        status_id: Option<StatusId>,
    ) -> &WorkflowDefinition {
        if self.definition.set_transition_endpoint(id, which, status_id) {
            debug!(
                transition_id = %id,
                endpoint = which.as_str(),
                status_id = ?status_id,
                "set transition endpoint"
            );
        } else {
            trace!(transition_id = %id, "endpoint change ignored: unknown transition");
        }
        &self.definition
    }

    /// Flips whether a task gates a transition.
    pub fn toggle_required_task(
        &mut self,
        id: TransitionId,
        task_id: TaskId,
    ) -> &WorkflowDefinition {
        if self.definition.toggle_required_task(id, task_id) {
            debug!(transition_id = %id, task_id = %task_id, "toggled required task");
        } else {
            trace!(transition_id = %id, "toggle ignored: unknown transition");
        }
        &self.definition
    }

    /// Resolves a transition for the editing form.
    #[must_use]
    pub fn transition_form(&self, id: TransitionId) -> Option<TransitionForm<'_>> {
        self.definition.transition_form(id)
    }

    /// Names of the required tasks of a transition that still resolve in its
    /// source status. Unknown transitions yield no names.
    #[must_use]
    pub fn required_task_names(&self, id: TransitionId) -> Vec<&str> {
        self.transition_form(id)
            .map(|form| form.required_task_names())
            .unwrap_or_default()
    }

    /// Derives graph nodes and edges from the current state.
    #[must_use]
    pub fn build_graph(&self) -> WorkflowGraph {
        self.definition.build_graph()
    }

    /// Builds the graph and hands it to `renderer`.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error when rendering fails.
    pub fn render_graph(&self, renderer: &mut impl GraphRenderer) -> GraphRenderResult<()> {
        let graph = self.build_graph();
        debug!(
            nodes = graph.nodes().len(),
            edges = graph.edges().len(),
            "rendering workflow graph"
        );
        renderer.render(&graph)
    }

    /// Appends a status with the given name and task names.
    pub(crate) fn insert_named_status(&mut self, name: &str, task_names: &[&str]) -> StatusId {
        let id = self.fresh_status_id();
        let mut task_ids: Vec<TaskId> = Vec::with_capacity(task_names.len());
        for _ in task_names {
            let task_id = self.fresh_task_id(&task_ids);
            task_ids.push(task_id);
        }
        let tasks = task_ids
            .into_iter()
            .zip(task_names)
            .map(|(task_id, task_name)| Task::new(task_id, *task_name));
        if self.definition.add_status(Status::new(id, name).with_tasks(tasks)) {
            debug!(status_id = %id, tasks = task_names.len(), "added status");
        } else {
            warn!(status_id = %id, "status not added");
        }
        id
    }

    /// Appends a transition with the given endpoints and required tasks.
    pub(crate) fn insert_transition(
        &mut self,
        from: Option<StatusId>,
        to: Option<StatusId>,
        required: Vec<TaskId>,
    ) -> TransitionId {
        let id = self.fresh_transition_id();
        let transition = Transition::new(id).between(from, to, required);
        let gated = transition.is_gated();
        if self.definition.add_transition(transition) {
            debug!(transition_id = %id, gated, "added transition");
        } else {
            warn!(transition_id = %id, "transition not added");
        }
        id
    }

    /// Draws status ids until one is not already held by the definition.
    ///
    /// An editor built over an existing definition may be handed a source
    /// that reissues ids the definition already uses.
    fn fresh_status_id(&self) -> StatusId {
        loop {
            let id = self.ids.next_status_id();
            if self.definition.status(id).is_none() {
                return id;
            }
            trace!(status_id = %id, "skipping status id already in use");
        }
    }

    /// Draws task ids until one is held neither by the definition nor by
    /// `pending`.
    fn fresh_task_id(&self, pending: &[TaskId]) -> TaskId {
        loop {
            let id = self.ids.next_task_id();
            if !self.definition.contains_task(id) && !pending.contains(&id) {
                return id;
            }
            trace!(task_id = %id, "skipping task id already in use");
        }
    }

    fn fresh_transition_id(&self) -> TransitionId {
        loop {
            let id = self.ids.next_transition_id();
            if self.definition.transition(id).is_none() {
                return id;
            }
            trace!(transition_id = %id, "skipping transition id already in use");
        }
    }
}
