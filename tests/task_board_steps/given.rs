//! Given steps for task board BDD scenarios.

use super::world::BoardWorld;
use crate::test_helpers::task_aged;
use chrono::TimeDelta;
use mockable::Clock;
use rstest_bdd_macros::given;

fn seed(world: &mut BoardWorld, title: &str, age: TimeDelta, is_completed: bool) {
    let task = task_aged(title, world.clock.utc(), age, is_completed);
    world.seeded.push(task);
    world.rebuild_board();
}

#[given("an empty task board")]
fn empty_task_board(world: &mut BoardWorld) {
    world.seeded.clear();
    world.rebuild_board();
}

#[given(r#"a task board holding "{title}" created today"#)]
fn board_holding_task_today(world: &mut BoardWorld, title: String) {
    seed(world, &title, TimeDelta::zero(), false);
}

#[given(r#"a completed task "{title}" created today"#)]
fn completed_task_today(world: &mut BoardWorld, title: String) {
    seed(world, &title, TimeDelta::zero(), true);
}

#[given(r#"a task "{title}" created yesterday"#)]
fn task_created_yesterday(world: &mut BoardWorld, title: String) {
    seed(world, &title, TimeDelta::days(1), false);
}
