//! Given steps for workflow editing BDD scenarios.

use super::world::{EditorWorld, names};
use rstest_bdd_macros::given;

fn add_named_status(world: &mut EditorWorld, name: &str, tasks: &[String]) {
    let status = world.editor.add_status();
    world.editor.rename_status(status, name);
    for task_name in tasks {
        if let Some(task) = world.editor.add_task(status) {
            world.editor.rename_task(status, task, task_name.as_str());
        }
    }
    world.statuses.insert(name.to_owned(), status);
}

#[given(r#"a status "{name}" with tasks "{tasks}""#)]
fn status_with_tasks(world: &mut EditorWorld, name: String, tasks: String) {
    add_named_status(world, &name, &names(&tasks));
}

#[given(r#"a status "{name}" with no tasks"#)]
fn status_without_tasks(world: &mut EditorWorld, name: String) {
    add_named_status(world, &name, &[]);
}
