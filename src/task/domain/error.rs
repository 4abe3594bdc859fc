//! Error types for task domain parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is not a valid UUID.
    #[error("invalid task identifier '{0}'")]
    InvalidTaskId(String),

    /// The persisted timestamp cannot be represented.
    #[error("timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}
