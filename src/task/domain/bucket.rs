//! Today/Upcoming/Completed classification.

use super::{Task, TaskId};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Display grouping a task falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Incomplete and stamped on the current calendar day.
    Today,
    /// Incomplete and stamped on any other day.
    Upcoming,
    /// Completed, whatever its timestamp.
    Completed,
}

impl Bucket {
    /// Classifies a single task against `now`.
    ///
    /// The task timestamp is converted into the time zone of `now` and the
    /// calendar dates are compared. Near midnight the result depends on that
    /// zone; no other correction is applied.
    #[must_use]
    pub fn of<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> Self {
        if task.is_completed() {
            return Self::Completed;
        }
        let stamped = task.created_at().with_timezone(&now.timezone());
        if stamped.date_naive() == now.date_naive() {
            Self::Today
        } else {
            Self::Upcoming
        }
    }

    /// Returns the section heading shown for the bucket.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
        }
    }
}

/// The three buckets, each keeping the source order of its tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    today: Vec<Task>,
    upcoming: Vec<Task>,
    completed: Vec<Task>,
}

impl Buckets {
    /// Tasks stamped today that are not completed.
    #[must_use]
    pub fn today(&self) -> &[Task] {
        &self.today
    }

    /// Tasks stamped on another day that are not completed.
    #[must_use]
    pub fn upcoming(&self) -> &[Task] {
        &self.upcoming
    }

    /// Completed tasks.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the tasks of one bucket.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &[Task] {
        match bucket {
            Bucket::Today => &self.today,
            Bucket::Upcoming => &self.upcoming,
            Bucket::Completed => &self.completed,
        }
    }

    /// Finds which bucket holds the task, if any.
    #[must_use]
    pub fn bucket_of(&self, id: TaskId) -> Option<Bucket> {
        [Bucket::Today, Bucket::Upcoming, Bucket::Completed]
            .into_iter()
            .find(|bucket| self.get(*bucket).iter().any(|task| task.id() == id))
    }

    /// Total number of tasks across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.today.len() + self.upcoming.len() + self.completed.len()
    }

    /// Returns `true` when no bucket holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits a snapshot into buckets relative to `now`.
///
/// Pure and linear in the number of tasks: the same snapshot and instant
/// always produce the same buckets.
#[must_use]
pub fn partition_at<Tz: TimeZone>(tasks: &[Task], now: &DateTime<Tz>) -> Buckets {
    tasks
        .iter()
        .fold(Buckets::default(), |mut buckets, task| {
            let target = match Bucket::of(task, now) {
                Bucket::Today => &mut buckets.today,
                Bucket::Upcoming => &mut buckets.upcoming,
                Bucket::Completed => &mut buckets.completed,
            };
            target.push(task.clone());
            buckets
        })
}
