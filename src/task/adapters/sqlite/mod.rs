//! `SQLite` adapter for task persistence.

mod config;
mod models;
mod schema;
mod store;

pub use config::SqliteStoreConfig;
pub use store::{SqliteTaskStore, TaskSqlitePool};
