//! Diesel schema for task persistence.

diesel::table! {
    /// One row per task.
    todos (id) {
        /// Hyphenated task UUID.
        id -> Text,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Creation or last-save time in epoch milliseconds.
        timestamp -> BigInt,
        /// Completion flag stored as 0 or 1.
        is_completed -> Bool,
    }
}
