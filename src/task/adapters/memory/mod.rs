//! In-memory task store for previews and tests.

mod store;

pub use store::{InMemoryTaskStore, demo_tasks};
