//! Diesel row models for task persistence.

use super::schema::todos;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TodoRow {
    /// Hyphenated task UUID.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub id: String,
    /// Task title.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub title: String,
    /// Task description.
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub description: String,
    /// Epoch-millisecond timestamp.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub timestamp: i64,
    /// Completion flag.
    #[diesel(sql_type = diesel::sql_types::Bool)]
    pub is_completed: bool,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow {
    /// Hyphenated task UUID.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Epoch-millisecond timestamp.
    pub timestamp: i64,
    /// Completion flag.
    pub is_completed: bool,
}
