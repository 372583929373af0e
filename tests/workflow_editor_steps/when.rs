//! When steps for workflow editing BDD scenarios.

use super::world::EditorWorld;
use leadflow::workflow::domain::Endpoint;
use rstest_bdd_macros::when;

#[when(r#"a transition is created from "{from}" to "{to}""#)]
fn create_transition(
    world: &mut EditorWorld,
    from: String,
    to: String,
) -> Result<(), eyre::Report> {
    let source = world.status_id(&from)?;
    let target = world.status_id(&to)?;
    let id = world.editor.add_transition();
    world
        .editor
        .set_transition_endpoint(id, Endpoint::From, Some(source));
    world
        .editor
        .set_transition_endpoint(id, Endpoint::To, Some(target));
    world.transition = Some(id);
    Ok(())
}

#[when(r#"the task "{task}" is toggled on the transition"#)]
fn toggle_task(world: &mut EditorWorld, task: String) -> Result<(), eyre::Report> {
    let transition = world.transition()?;
    let id = transition.id();
    let source = transition
        .from()
        .ok_or_else(|| eyre::eyre!("transition has no source"))?;
    let task_id = world.task_id(source, &task)?;
    world.editor.toggle_required_task(id, task_id);
    Ok(())
}

#[when(r#"the task "{task}" is deleted from "{status}""#)]
fn delete_task(world: &mut EditorWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let status_id = world.status_id(&status)?;
    let task_id = world.task_id(status_id, &task)?;
    world.editor.delete_task(status_id, task_id);
    world.deleted_task = Some(task_id);
    Ok(())
}

#[when(r#"the status "{status}" is deleted"#)]
fn delete_status(world: &mut EditorWorld, status: String) -> Result<(), eyre::Report> {
    let status_id = world.status_id(&status)?;
    world.editor.delete_status(status_id);
    Ok(())
}

#[when(r#"the transition source is changed to "{status}""#)]
fn change_source(world: &mut EditorWorld, status: String) -> Result<(), eyre::Report> {
    let status_id = world.status_id(&status)?;
    let id = world.transition()?.id();
    world
        .editor
        .set_transition_endpoint(id, Endpoint::From, Some(status_id));
    Ok(())
}
