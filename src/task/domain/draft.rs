//! Edit-in-progress draft and presentation mode.

use super::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Title and description being composed before save.
///
/// A draft with an `editing_id` updates that task on save; without one it
/// produces a new task. Only one draft exists per board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    title: String,
    description: String,
    editing_id: Option<TaskId>,
}

impl Draft {
    /// Creates a draft pre-filled from an existing task.
    #[must_use]
    pub fn editing(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            editing_id: Some(task.id()),
        }
    }

    /// Current title buffer.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current description buffer.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Task being edited, if any.
    #[must_use]
    pub const fn editing_id(&self) -> Option<TaskId> {
        self.editing_id
    }

    /// Replaces the title buffer.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description buffer.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns `true` when both buffers hold non-whitespace text.
    #[must_use]
    pub fn is_saveable(&self) -> bool {
        !is_blank(&self.title) && !is_blank(&self.description)
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Presentation hint for laying out the buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Single-column list.
    #[default]
    List,
    /// Two-column staggered grid.
    Grid,
}

impl DisplayMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }

    /// Number of layout columns for the mode.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Self::List => 1,
            Self::Grid => 2,
        }
    }
}
