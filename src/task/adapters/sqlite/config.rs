//! Connection settings for the `SQLite` task store.

use serde::Deserialize;
use std::time::Duration;

const IN_MEMORY_URL: &str = ":memory:";

/// Settings used to open a [`super::SqliteTaskStore`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SqliteStoreConfig {
    /// Database file path, or `:memory:`.
    pub database_url: String,
    /// Maximum pooled connections.
    pub max_connections: u32,
    /// How long a connection waits on a locked database, in milliseconds.
    pub busy_timeout_ms: u32,
    /// How long opening the pool may take, in milliseconds.
    pub connect_timeout_ms: u32,
}

impl SqliteStoreConfig {
    /// Creates settings for a database file.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Settings for a private in-memory database.
    ///
    /// `SQLite` gives each connection its own in-memory database, so the pool
    /// is limited to one connection that lives as long as the pool does.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: IN_MEMORY_URL.to_owned(),
            max_connections: 1,
            ..Self::default()
        }
    }

    /// Returns `true` for the in-memory database URL.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.database_url == IN_MEMORY_URL
    }

    pub(super) fn busy_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.busy_timeout_ms))
    }

    pub(super) fn connect_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.connect_timeout_ms))
    }
}

impl Default for SqliteStoreConfig {
    fn default() -> Self {
        Self {
            database_url: "todo_db.sqlite3".to_owned(),
            max_connections: 4,
            busy_timeout_ms: 5_000,
            connect_timeout_ms: 5_000,
        }
    }
}
