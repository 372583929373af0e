//! Behaviour tests for lead workflow editing.

#[path = "workflow_editor_steps/mod.rs"]
mod workflow_editor_steps_defs;

use rstest_bdd_macros::scenario;
use workflow_editor_steps_defs::world::{EditorWorld, world};

#[scenario(
    path = "tests/features/workflow_editor.feature",
    name = "Required tasks follow the source status"
)]
fn required_tasks_follow_source(world: EditorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/workflow_editor.feature",
    name = "Deleting a required task leaves a dangling reference"
)]
fn deleted_task_stays_required(world: EditorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/workflow_editor.feature",
    name = "Deleting a status keeps its transitions"
)]
fn deleted_status_keeps_transitions(world: EditorWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/workflow_editor.feature",
    name = "Changing the source status re-seeds required tasks"
)]
fn changing_source_reseeds(world: EditorWorld) {
    let _ = world;
}
