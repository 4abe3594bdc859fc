//! Published board state and its configuration.

use crate::task::domain::{Buckets, DisplayMode, Draft, Task, partition_at};
use chrono::{DateTime, TimeZone};
use serde::Deserialize;
use std::fmt;

/// Initial presentation settings for a [`super::TaskBoard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Layout used until the user toggles it.
    pub display_mode: DisplayMode,
    /// Whether the compose surface starts open.
    pub compose_visible_on_start: bool,
}

/// Store operation a notice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Creating a task from the draft.
    Create,
    /// Saving an edited task.
    Update,
    /// Flipping a completion flag.
    ToggleComplete,
    /// Deleting a task.
    Delete,
}

impl StoreOperation {
    /// Short verb phrase for user-facing messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Create => "create the task",
            Self::Update => "save your changes",
            Self::ToggleComplete => "update the task",
            Self::Delete => "delete the task",
        }
    }
}

/// Recoverable storage failure shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreNotice {
    operation: StoreOperation,
    message: String,
}

impl StoreNotice {
    /// Creates a notice for a failed operation.
    #[must_use]
    pub fn new(operation: StoreOperation, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// The operation that failed.
    #[must_use]
    pub const fn operation(&self) -> StoreOperation {
        self.operation
    }

    /// The underlying failure text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not {}: {}", self.operation.describe(), self.message)
    }
}

/// Everything the presentation layer renders.
///
/// A fresh value is published on every change; buckets always derive from
/// `tasks` as of the last store emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
    buckets: Buckets,
    draft: Draft,
    is_compose_visible: bool,
    display_mode: DisplayMode,
    notice: Option<StoreNotice>,
}

impl BoardState {
    pub(super) fn initial<Tz: TimeZone>(
        config: BoardConfig,
        tasks: Vec<Task>,
        now: &DateTime<Tz>,
    ) -> Self {
        let mut state = Self {
            is_compose_visible: config.compose_visible_on_start,
            display_mode: config.display_mode,
            ..Self::default()
        };
        state.apply_snapshot(tasks, now);
        state
    }

    /// Latest full task set, in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Today, Upcoming and Completed groupings of [`Self::tasks`].
    #[must_use]
    pub const fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    /// Incomplete tasks stamped today.
    #[must_use]
    pub fn today_tasks(&self) -> &[Task] {
        self.buckets.today()
    }

    /// Incomplete tasks stamped on another day.
    #[must_use]
    pub fn upcoming_tasks(&self) -> &[Task] {
        self.buckets.upcoming()
    }

    /// Completed tasks.
    #[must_use]
    pub fn completed_tasks(&self) -> &[Task] {
        self.buckets.completed()
    }

    /// The edit-in-progress draft.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current draft title.
    #[must_use]
    pub fn draft_title(&self) -> &str {
        self.draft.title()
    }

    /// Current draft description.
    #[must_use]
    pub fn draft_description(&self) -> &str {
        self.draft.description()
    }

    /// Whether both draft buffers are non-blank.
    #[must_use]
    pub fn is_save_enabled(&self) -> bool {
        self.draft.is_saveable()
    }

    /// Whether the compose surface is shown.
    #[must_use]
    pub const fn is_compose_visible(&self) -> bool {
        self.is_compose_visible
    }

    /// Current layout mode.
    #[must_use]
    pub const fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Most recent storage failure, if not yet dismissed.
    #[must_use]
    pub const fn notice(&self) -> Option<&StoreNotice> {
        self.notice.as_ref()
    }

    pub(super) fn apply_snapshot<Tz: TimeZone>(&mut self, tasks: Vec<Task>, now: &DateTime<Tz>) {
        self.buckets = partition_at(&tasks, now);
        self.tasks = tasks;
    }

    pub(super) const fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub(super) fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }

    pub(super) fn begin_edit(&mut self, draft: Draft) {
        self.draft = draft;
        self.is_compose_visible = true;
    }

    pub(super) const fn set_compose_visible(&mut self, visible: bool) {
        self.is_compose_visible = visible;
    }

    pub(super) const fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    pub(super) fn set_notice(&mut self, notice: Option<StoreNotice>) {
        self.notice = notice;
    }
}
