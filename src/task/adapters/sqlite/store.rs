//! `SQLite` task store implementation.

use super::{
    config::SqliteStoreConfig,
    models::{NewTodoRow, TodoRow},
    schema::todos,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDomainError, TaskId, timestamp_from_millis},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

const CREATE_TODOS_SQL: &str =
    include_str!("../../../../migrations/2026-10-18-000000_create_todos/up.sql");

const SELECT_ALL_SQL: &str = concat!(
    "SELECT id, title, description, timestamp, is_completed ",
    "FROM todos ORDER BY rowid",
);

const TOGGLE_COMPLETE_SQL: &str = "UPDATE todos SET is_completed = NOT is_completed WHERE id = ?";

/// `SQLite` connection pool type used by the task store.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// `SQLite`-backed task store.
///
/// Every write that touches a row re-reads the table and publishes the new
/// snapshot to [`TaskStore::watch_all`] subscribers.
#[derive(Debug)]
pub struct SqliteTaskStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    pool: TaskSqlitePool,
    clock: Arc<C>,
    tasks: watch::Sender<Vec<Task>>,
}

impl From<diesel::result::Error> for TaskStoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}

#[derive(Debug, Clone, Copy)]
struct BusyTimeout(Duration);

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for BusyTimeout {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("PRAGMA busy_timeout = {};", self.0.as_millis()))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

impl<C> SqliteTaskStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Opens the database described by `config`, creating the table when
    /// missing, and loads the initial snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the pool cannot be built
    /// or the schema cannot be applied, and [`TaskStoreError::CorruptRow`]
    /// when an existing row cannot be decoded.
    pub async fn open(config: SqliteStoreConfig, clock: Arc<C>) -> TaskStoreResult<Self> {
        let database_url = config.database_url.clone();
        let pool = tokio::task::spawn_blocking(move || build_pool(&config))
            .await
            .map_err(TaskStoreError::persistence)??;
        let store = Self::from_pool(pool, clock).await?;
        tracing::info!(
            database = %database_url,
            tasks = store.tasks.borrow().len(),
            "opened task database"
        );
        Ok(store)
    }

    /// Wraps an existing pool, creating the table when missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the schema cannot be applied or the
    /// initial snapshot cannot be read.
    pub async fn from_pool(pool: TaskSqlitePool, clock: Arc<C>) -> TaskStoreResult<Self> {
        let (tasks, _) = watch::channel(Vec::new());
        let store = Self { pool, clock, tasks };
        let snapshot = store
            .run_blocking(|connection| {
                connection
                    .batch_execute(CREATE_TODOS_SQL)
                    .map_err(TaskStoreError::persistence)?;
                load_all(connection)
            })
            .await?;
        store.tasks.send_replace(snapshot);
        Ok(store)
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }

    /// Runs a write and, when it touched any row, publishes a fresh snapshot.
    ///
    /// The write and the snapshot reload share one transaction; a failed
    /// reload rolls the write back. Returns whether a row was affected.
    async fn write<F>(&self, f: F) -> TaskStoreResult<bool>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<usize> + Send + 'static,
    {
        let snapshot = self
            .run_blocking(move |connection| {
                connection.transaction::<_, TaskStoreError, _>(|tx_conn| {
                    let affected = f(tx_conn)?;
                    if affected == 0 {
                        return Ok(None);
                    }
                    load_all(tx_conn).map(Some)
                })
            })
            .await?;

        let Some(tasks) = snapshot else {
            return Ok(false);
        };
        self.tasks.send_replace(tasks);
        Ok(true)
    }
}

#[async_trait]
impl<C> TaskStore for SqliteTaskStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn watch_all(&self) -> watch::Receiver<Vec<Task>> {
        self.tasks.subscribe()
    }

    async fn get_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(load_all).await
    }

    async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let key = id.to_string();
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(key)
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn create(&self, title: &str, description: &str) -> TaskStoreResult<Task> {
        let task = Task::new(title, description, &*self.clock);
        let new_row = to_new_row(&task);
        self.write(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
        })
        .await?;
        tracing::debug!(task_id = %task.id(), "inserted task row");
        Ok(task)
    }

    async fn update(&self, id: TaskId, title: &str, description: &str) -> TaskStoreResult<()> {
        let key = id.to_string();
        let new_title = title.to_owned();
        let new_description = description.to_owned();
        let timestamp = self.clock.utc().timestamp_millis();
        let updated = self
            .write(move |connection| {
                diesel::update(todos::table.find(key))
                    .set((
                        todos::title.eq(new_title),
                        todos::description.eq(new_description),
                        todos::timestamp.eq(timestamp),
                    ))
                    .execute(connection)
            })
            .await?;
        if !updated {
            tracing::debug!(task_id = %id, "update ignored for unknown task");
        }
        Ok(())
    }

    async fn toggle_complete(&self, id: TaskId) -> TaskStoreResult<()> {
        let key = id.to_string();
        let toggled = self
            .write(move |connection| {
                diesel::sql_query(TOGGLE_COMPLETE_SQL)
                    .bind::<diesel::sql_types::Text, _>(key)
                    .execute(connection)
            })
            .await?;
        if !toggled {
            tracing::debug!(task_id = %id, "toggle ignored for unknown task");
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let key = id.to_string();
        let deleted = self
            .write(move |connection| diesel::delete(todos::table.find(key)).execute(connection))
            .await?;
        if !deleted {
            tracing::debug!(task_id = %id, "delete ignored for unknown task");
        }
        Ok(())
    }
}

fn build_pool(config: &SqliteStoreConfig) -> TaskStoreResult<TaskSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(config.database_url.as_str());
    let builder = Pool::builder()
        .max_size(config.max_connections.max(1))
        .connection_timeout(config.connect_timeout())
        .connection_customizer(Box::new(BusyTimeout(config.busy_timeout())));
    let builder = if config.is_in_memory() {
        builder.max_size(1).idle_timeout(None).max_lifetime(None)
    } else {
        builder
    };
    builder.build(manager).map_err(TaskStoreError::persistence)
}

fn load_all(connection: &mut SqliteConnection) -> TaskStoreResult<Vec<Task>> {
    diesel::sql_query(SELECT_ALL_SQL)
        .load::<TodoRow>(connection)
        .map_err(TaskStoreError::persistence)?
        .into_iter()
        .map(row_to_task)
        .collect()
}

fn to_new_row(task: &Task) -> NewTodoRow {
    NewTodoRow {
        id: task.id().to_string(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        timestamp: task.created_at_millis(),
        is_completed: task.is_completed(),
    }
}

fn row_to_task(row: TodoRow) -> TaskStoreResult<Task> {
    let TodoRow {
        id: raw_id,
        title,
        description,
        timestamp,
        is_completed,
    } = row;

    let id = TaskId::parse(&raw_id).map_err(|err| corrupt_row(&raw_id, &err))?;
    let created_at = timestamp_from_millis(timestamp).map_err(|err| corrupt_row(&raw_id, &err))?;

    Ok(Task::from_persisted(PersistedTaskData {
        id,
        title,
        description,
        created_at,
        is_completed,
    }))
}

fn corrupt_row(raw_id: &str, err: &TaskDomainError) -> TaskStoreError {
    TaskStoreError::CorruptRow {
        id: raw_id.to_owned(),
        reason: err.to_string(),
    }
}
