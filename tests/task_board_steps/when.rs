//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use tasklist::task::domain::TaskId;

#[when(r#"the user composes a task titled "{title}" described "{description}""#)]
fn compose_task(
    world: &mut BoardWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let board = world.board()?;
    board.change_title(title);
    board.change_description(description);
    Ok(())
}

#[when("the user composes a task with a blank title")]
fn compose_blank_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = world.board()?;
    board.change_title("   ");
    board.change_description("Details without a title");
    Ok(())
}

#[when("the user saves the draft")]
fn save_draft(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.board()?.save());
    Ok(())
}

#[when("the user begins editing an unknown task")]
fn begin_edit_unknown(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.board()?.begin_edit(TaskId::new());
    Ok(())
}

#[when(r#"the user toggles completion of "{title}""#)]
fn toggle_completion(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    run_async(world.board()?.toggle_complete(id));
    Ok(())
}

#[when(r#"the user deletes "{title}""#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    run_async(world.board()?.delete(id));
    Ok(())
}
