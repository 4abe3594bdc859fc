//! End-to-end task board flows over the in-memory store.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, settle, task_aged, titles};
use chrono::TimeDelta;
use mockable::Clock;
use rstest::{fixture, rstest};
use tasklist::task::{
    adapters::memory::{InMemoryTaskStore, demo_tasks},
    ports::TaskStore,
    services::{BoardConfig, TaskBoard},
};

type TestStore = InMemoryTaskStore<FixedClock>;

#[fixture]
fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::at_noon())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn full_task_lifecycle_moves_between_buckets(
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let store: Arc<TestStore> = Arc::new(InMemoryTaskStore::with_clock(Arc::clone(&clock)));
    let mut board = TaskBoard::new(Arc::clone(&store), Arc::clone(&clock), BoardConfig::default());

    board.open_compose();
    board.change_title("Write report");
    board.change_description("Quarterly numbers");
    board.save().await;
    board.close_compose();

    let created = settle(&board, |state| state.today_tasks().len() == 1).await?;
    let id = created
        .today_tasks()
        .first()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("created task missing from today"))?;
    eyre::ensure!(!created.is_compose_visible(), "compose should be closed");

    board.toggle_complete(id).await;
    let completed = settle(&board, |state| state.completed_tasks().len() == 1).await?;
    eyre::ensure!(completed.today_tasks().is_empty(), "task left in today");

    board.delete(id).await;
    let emptied = settle(&board, |state| state.tasks().is_empty()).await?;
    eyre::ensure!(emptied.buckets().is_empty(), "buckets should be empty");
    eyre::ensure!(
        store.get(id).await?.is_none(),
        "store should no longer hold the task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn external_store_writes_refresh_buckets(
    clock: Arc<FixedClock>,
) -> Result<(), eyre::Report> {
    let store: Arc<TestStore> = Arc::new(InMemoryTaskStore::with_clock(Arc::clone(&clock)));
    let board = TaskBoard::new(Arc::clone(&store), Arc::clone(&clock), BoardConfig::default());

    store.create("Written elsewhere", "Arrives by refresh").await?;

    let state = settle(&board, |state| !state.tasks().is_empty()).await?;
    eyre::ensure!(
        titles(state.today_tasks()) == vec!["Written elsewhere"],
        "unexpected today bucket: {:?}",
        titles(state.today_tasks())
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_scenario_groups_tasks(clock: Arc<FixedClock>) -> Result<(), eyre::Report> {
    let now = clock.utc();
    let seeded = vec![
        task_aged("A", now, TimeDelta::zero(), false),
        task_aged("B", now, TimeDelta::zero(), true),
        task_aged("C", now, TimeDelta::days(1), false),
    ];
    let store = Arc::new(InMemoryTaskStore::with_tasks(seeded, Arc::clone(&clock)));
    let board = TaskBoard::new(store, clock, BoardConfig::default());

    let state = board.state();

    eyre::ensure!(titles(state.today_tasks()) == vec!["A"], "today mismatch");
    eyre::ensure!(titles(state.upcoming_tasks()) == vec!["C"], "upcoming mismatch");
    eyre::ensure!(titles(state.completed_tasks()) == vec!["B"], "completed mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn demo_board_splits_demo_tasks(clock: Arc<FixedClock>) -> Result<(), eyre::Report> {
    let store = Arc::new(InMemoryTaskStore::with_tasks(
        demo_tasks(&*clock),
        Arc::clone(&clock),
    ));
    let board = TaskBoard::new(store, clock, BoardConfig::default());

    let state = board.state();

    eyre::ensure!(
        titles(state.today_tasks()) == vec!["Todo 1", "Todo 3", "Todo 5"],
        "today mismatch"
    );
    eyre::ensure!(
        titles(state.completed_tasks()) == vec!["Todo 0", "Todo 2", "Todo 4"],
        "completed mismatch"
    );
    Ok(())
}

#[rstest]
fn board_config_deserializes_with_defaults() -> Result<(), eyre::Report> {
    let config: BoardConfig = serde_json::from_str(r#"{"display_mode":"grid"}"#)?;

    eyre::ensure!(
        config.display_mode.columns() == 2,
        "grid should use two columns"
    );
    eyre::ensure!(!config.compose_visible_on_start, "compose should start hidden");
    Ok(())
}
