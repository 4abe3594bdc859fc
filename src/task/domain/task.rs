//! Task record and its relative-time presentation helper.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One to-do entry.
///
/// `created_at` holds the creation time, or the time of the latest save when
/// the task has been edited. Timestamps are truncated to milliseconds so a
/// task compares equal after a round trip through epoch-millisecond storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    is_completed: bool,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation or last-save timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion flag.
    pub is_completed: bool,
}

impl Task {
    /// Creates a new incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            created_at: now_millis(clock),
            is_completed: false,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at.trunc_subsecs(3),
            is_completed: data.is_completed,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation or last-save timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp as epoch milliseconds.
    #[must_use]
    pub const fn created_at_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Replaces title and description and restamps the task.
    pub fn edit(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.created_at = now_millis(clock);
    }

    /// Flips the completion flag.
    pub const fn toggle_complete(&mut self) {
        self.is_completed = !self.is_completed;
    }

    /// Describes the timestamp relative to `now`, e.g. `"5 minutes ago"`.
    ///
    /// Differences of a week or more fall back to the calendar date.
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        relative_label(now.signed_duration_since(self.created_at), self.created_at)
    }
}

/// Converts epoch milliseconds into a UTC timestamp.
///
/// # Errors
///
/// Returns [`TaskDomainError::TimestampOutOfRange`] when chrono cannot
/// represent the instant.
pub fn timestamp_from_millis(millis: i64) -> Result<DateTime<Utc>, TaskDomainError> {
    DateTime::from_timestamp_millis(millis).ok_or(TaskDomainError::TimestampOutOfRange(millis))
}

fn now_millis(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(3)
}

fn relative_label(elapsed: TimeDelta, at: DateTime<Utc>) -> String {
    let is_past = elapsed >= TimeDelta::zero();
    let magnitude = elapsed.abs();

    let (count, unit) = if magnitude.num_seconds() < 1 {
        return "just now".to_owned();
    } else if magnitude.num_minutes() < 1 {
        (magnitude.num_seconds(), "second")
    } else if magnitude.num_hours() < 1 {
        (magnitude.num_minutes(), "minute")
    } else if magnitude.num_days() < 1 {
        (magnitude.num_hours(), "hour")
    } else if magnitude.num_days() == 1 {
        return if is_past { "yesterday" } else { "tomorrow" }.to_owned();
    } else if magnitude.num_days() < 7 {
        (magnitude.num_days(), "day")
    } else {
        return at.format("%b %-d, %Y").to_string();
    };

    let plural = if count == 1 { "" } else { "s" };
    if is_past {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}
