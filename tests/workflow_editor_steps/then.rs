//! Then steps for workflow editing BDD scenarios.

use super::world::{EditorWorld, names};
use rstest_bdd_macros::then;

#[then(r#"the transition requires "{tasks}""#)]
fn transition_requires(world: &EditorWorld, tasks: String) -> Result<(), eyre::Report> {
    let id = world.transition()?.id();
    let required: Vec<String> = world
        .editor
        .required_task_names(id)
        .into_iter()
        .map(ToOwned::to_owned)
        .collect();
    eyre::ensure!(
        required == names(&tasks),
        "expected required tasks {tasks}, found {required:?}"
    );
    Ok(())
}

#[then("the transition still references the deleted task")]
fn still_references_deleted_task(world: &EditorWorld) -> Result<(), eyre::Report> {
    let task = world
        .deleted_task
        .ok_or_else(|| eyre::eyre!("no task was deleted in this scenario"))?;
    eyre::ensure!(
        world.transition()?.requires(task),
        "deleted task was dropped from the transition"
    );
    Ok(())
}

#[then(r#"status "{status}" has no tasks"#)]
fn status_has_no_tasks(world: &EditorWorld, status: String) -> Result<(), eyre::Report> {
    let status_id = world.status_id(&status)?;
    let count = world.editor.tasks_of(status_id).len();
    eyre::ensure!(count == 0, "expected no tasks, found {count}");
    Ok(())
}

#[then("the graph shows {nodes:usize} statuses and {edges:usize} transitions")]
fn graph_counts(world: &EditorWorld, nodes: usize, edges: usize) -> Result<(), eyre::Report> {
    let graph = world.editor.build_graph();
    eyre::ensure!(
        graph.nodes().len() == nodes,
        "expected {nodes} nodes, found {}",
        graph.nodes().len()
    );
    eyre::ensure!(
        graph.edges().len() == edges,
        "expected {edges} edges, found {}",
        graph.edges().len()
    );
    Ok(())
}

#[then(r#"the edge from "{from}" to "{to}" is labelled "{label}""#)]
fn edge_is_labelled(
    world: &EditorWorld,
    from: String,
    to: String,
    label: String,
) -> Result<(), eyre::Report> {
    let source = world.status_id(&from)?;
    let target = world.status_id(&to)?;
    let graph = world.editor.build_graph();
    let edge = graph
        .edges()
        .iter()
        .find(|edge| edge.source == Some(source) && edge.target == Some(target))
        .ok_or_else(|| eyre::eyre!("no edge from {from} to {to}"))?;
    eyre::ensure!(
        edge.label.as_str() == label,
        "expected label {label}, found {}",
        edge.label
    );
    Ok(())
}

#[then("the transition target is unresolved")]
fn target_is_unresolved(world: &EditorWorld) -> Result<(), eyre::Report> {
    let id = world.transition()?.id();
    let form = world
        .editor
        .transition_form(id)
        .ok_or_else(|| eyre::eyre!("missing transition form"))?;
    eyre::ensure!(form.target.is_none(), "target still resolves");
    eyre::ensure!(
        form.transition.to().is_some(),
        "target reference was cleared"
    );
    Ok(())
}
