//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use crate::test_helpers::{settle, titles};
use rstest_bdd_macros::then;
use tasklist::task::domain::Bucket;

fn bucket_holds_only(
    world: &mut BoardWorld,
    bucket: Bucket,
    title: &str,
) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let state = run_async(settle(board, |state| {
        titles(state.buckets().get(bucket)) == vec![title]
    }))
    .map_err(|err| {
        eyre::eyre!(
            "{} bucket never held only {title:?}: {err}",
            bucket.label()
        )
    })?;
    eyre::ensure!(
        state.buckets().len() == state.tasks().len(),
        "buckets must cover every task exactly once"
    );
    Ok(())
}

#[then(r#"the today bucket contains only "{title}""#)]
fn today_contains_only(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    bucket_holds_only(world, Bucket::Today, &title)
}

#[then(r#"the upcoming bucket contains only "{title}""#)]
fn upcoming_contains_only(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    bucket_holds_only(world, Bucket::Upcoming, &title)
}

#[then(r#"the completed bucket contains only "{title}""#)]
fn completed_contains_only(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    bucket_holds_only(world, Bucket::Completed, &title)
}

#[then("the draft is cleared")]
fn draft_is_cleared(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let state = world.board()?.state();
    eyre::ensure!(
        state.draft_title().is_empty() && state.draft_description().is_empty(),
        "draft buffers should be empty after save"
    );
    eyre::ensure!(
        state.draft().editing_id().is_none(),
        "draft should not reference a task after save"
    );
    eyre::ensure!(!state.is_save_enabled(), "save should be disabled");
    Ok(())
}

#[then(r#"the draft title is "{title}""#)]
fn draft_title_is(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let state = world.board()?.state();
    eyre::ensure!(
        state.draft_title() == title,
        "expected draft title {title:?}, found {:?}",
        state.draft_title()
    );
    Ok(())
}

#[then("the compose surface is hidden")]
fn compose_hidden(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.board()?.state().is_compose_visible(),
        "compose surface should stay hidden"
    );
    Ok(())
}

#[then("the board holds no tasks")]
fn board_holds_no_tasks(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let board = world.board()?;
    let state = run_async(settle(board, |state| state.tasks().is_empty()))?;
    eyre::ensure!(state.buckets().is_empty(), "buckets should be empty");
    Ok(())
}
