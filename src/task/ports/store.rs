//! Store port for durable task storage with live read access.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// Writes referencing an unknown identifier succeed without effect. Every
/// write that changes the stored set is followed by a new snapshot on the
/// [`TaskStore::watch_all`] channel.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Subscribes to the full task set.
    ///
    /// The receiver starts at the current snapshot and observes every later
    /// change, in insertion order, for as long as the store lives.
    fn watch_all(&self) -> watch::Receiver<Vec<Task>>;

    /// Reads the full task set once.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the backing store fails.
    async fn get_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the read fails, and
    /// [`TaskStoreError::CorruptRow`] when the stored row cannot be decoded.
    async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Creates an incomplete task with a fresh identifier and the current
    /// time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the insert fails.
    async fn create(&self, title: &str, description: &str) -> TaskStoreResult<Task>;

    /// Replaces title and description of an existing task and restamps it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the update fails.
    async fn update(&self, id: TaskId, title: &str, description: &str) -> TaskStoreResult<()>;

    /// Flips the completion flag of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the update fails.
    async fn toggle_complete(&self, id: TaskId) -> TaskStoreResult<()>;

    /// Removes a task permanently.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the delete fails.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A stored row could not be decoded into a task.
    #[error("corrupt task row '{id}': {reason}")]
    CorruptRow {
        /// Raw identifier of the offending row.
        id: String,
        /// Decoding failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
