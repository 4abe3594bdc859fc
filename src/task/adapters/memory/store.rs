//! Observable in-memory task store.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use tokio::sync::watch;

use crate::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::{TaskStore, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// The watch channel's value is the store itself, so every write and its
/// notification happen under the channel's own lock.
#[derive(Debug)]
pub struct InMemoryTaskStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    tasks: watch::Sender<Vec<Task>>,
    clock: Arc<C>,
}

impl InMemoryTaskStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store stamping tasks with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self::with_tasks(Vec::new(), clock)
    }

    /// Creates a store pre-seeded with `tasks`, kept in the given order.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>, clock: Arc<C>) -> Self {
        let (sender, _) = watch::channel(tasks);
        Self {
            tasks: sender,
            clock,
        }
    }

    fn modify_task(&self, id: TaskId, change: impl FnOnce(&mut Task)) -> bool {
        self.tasks.send_if_modified(|tasks| {
            tasks
                .iter_mut()
                .find(|task| task.id() == id)
                .map(change)
                .is_some()
        })
    }
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    fn watch_all(&self) -> watch::Receiver<Vec<Task>> {
        self.tasks.subscribe()
    }

    async fn get_all(&self) -> TaskStoreResult<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self
            .tasks
            .borrow()
            .iter()
            .find(|task| task.id() == id)
            .cloned())
    }

    async fn create(&self, title: &str, description: &str) -> TaskStoreResult<Task> {
        let task = Task::new(title, description, &*self.clock);
        let stored = task.clone();
        self.tasks.send_modify(|tasks| tasks.push(stored));
        tracing::debug!(task_id = %task.id(), "created task in memory");
        Ok(task)
    }

    async fn update(&self, id: TaskId, title: &str, description: &str) -> TaskStoreResult<()> {
        let found = self.modify_task(id, |task| task.edit(title, description, &*self.clock));
        if !found {
            tracing::debug!(task_id = %id, "update ignored for unknown task");
        }
        Ok(())
    }

    async fn toggle_complete(&self, id: TaskId) -> TaskStoreResult<()> {
        let found = self.modify_task(id, Task::toggle_complete);
        if !found {
            tracing::debug!(task_id = %id, "toggle ignored for unknown task");
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let removed = self.tasks.send_if_modified(|tasks| {
            let before = tasks.len();
            tasks.retain(|task| task.id() != id);
            tasks.len() != before
        });
        if !removed {
            tracing::debug!(task_id = %id, "delete ignored for unknown task");
        }
        Ok(())
    }
}

/// Builds six sample tasks, every even-indexed one completed.
///
/// Used to populate previews before any real data exists.
#[must_use]
pub fn demo_tasks(clock: &impl Clock) -> Vec<Task> {
    let created_at = clock.utc();
    (0..6_u8)
        .zip([true, false].into_iter().cycle())
        .map(|(index, is_completed)| {
            Task::from_persisted(PersistedTaskData {
                id: TaskId::new(),
                title: format!("Todo {index}"),
                description: concat!(
                    "This is a sample task created for demonstration purposes. ",
                    "It represents a typical entry in a to-do list."
                )
                .to_owned(),
                created_at,
                is_completed,
            })
        })
        .collect()
}
