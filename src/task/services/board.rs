//! Task board: the state manager between a task store and the UI.

use super::state::{BoardConfig, BoardState, StoreNotice, StoreOperation};
use crate::task::{
    domain::{Draft, Task, TaskId},
    ports::{TaskStore, TaskStoreResult},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::{sync::watch, task::JoinHandle};

/// Owns the draft, derives the buckets and relays intents to the store.
///
/// Intents take `&mut self`, so a single owner issues them one at a time.
/// Store-backed intents return once the write settles; their visible effect
/// arrives through the next store snapshot, picked up by a background task
/// that recomputes the buckets. Failures never escape as errors: they are
/// logged and published as [`BoardState::notice`].
pub struct TaskBoard<S>
where
    S: TaskStore + 'static,
{
    store: Arc<S>,
    snapshot: watch::Receiver<Vec<Task>>,
    state: Arc<watch::Sender<BoardState>>,
    refresh: JoinHandle<()>,
}

impl<S> TaskBoard<S>
where
    S: TaskStore + 'static,
{
    /// Creates a board over `store` and starts following its snapshots.
    ///
    /// `clock` supplies the local "now" used to tell today from upcoming.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn new<C>(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        let mut updates = store.watch_all();
        let tasks = updates.borrow_and_update().clone();
        let initial = BoardState::initial(config, tasks, &clock.local());
        let (sender, _) = watch::channel(initial);
        let state = Arc::new(sender);
        let refresh = tokio::spawn(refresh_buckets(updates, Arc::clone(&state), clock));

        Self {
            snapshot: store.watch_all(),
            store,
            state,
            refresh,
        }
    }

    /// Subscribes to published board state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current board state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Replaces the draft title.
    pub fn change_title(&mut self, text: impl Into<String>) {
        let title = text.into();
        self.state.send_modify(|state| state.draft_mut().set_title(title));
    }

    /// Replaces the draft description.
    pub fn change_description(&mut self, text: impl Into<String>) {
        let description = text.into();
        self.state
            .send_modify(|state| state.draft_mut().set_description(description));
    }

    /// Shows the compose surface, leaving the draft as it is.
    pub fn open_compose(&mut self) {
        self.state
            .send_if_modified(|state| set_compose_visible(state, true));
    }

    /// Hides the compose surface. The draft is kept.
    pub fn close_compose(&mut self) {
        self.state
            .send_if_modified(|state| set_compose_visible(state, false));
    }

    /// Loads a task into the draft for editing and opens the compose surface.
    ///
    /// Unknown identifiers leave the board untouched.
    pub fn begin_edit(&mut self, id: TaskId) {
        let draft = self
            .snapshot
            .borrow()
            .iter()
            .find(|task| task.id() == id)
            .map(Draft::editing);
        let Some(draft) = draft else {
            tracing::debug!(task_id = %id, "edit ignored for unknown task");
            return;
        };
        self.state.send_modify(|state| state.begin_edit(draft));
    }

    /// Persists the draft: updates the task being edited, or creates a new
    /// one.
    ///
    /// A blank draft is ignored. On success the draft is cleared; on failure
    /// it is kept so the user can retry.
    pub async fn save(&mut self) {
        let draft = self.state.borrow().draft().clone();
        if !draft.is_saveable() {
            tracing::debug!("save ignored for blank draft");
            return;
        }

        let (operation, result) = match draft.editing_id() {
            Some(id) => (
                StoreOperation::Update,
                self.store
                    .update(id, draft.title(), draft.description())
                    .await,
            ),
            None => (
                StoreOperation::Create,
                self.store
                    .create(draft.title(), draft.description())
                    .await
                    .map(|task| tracing::info!(task_id = %task.id(), "created task")),
            ),
        };

        if self.settle(operation, result) {
            self.state.send_modify(BoardState::reset_draft);
        }
    }

    /// Flips the completion flag of a task. Unknown identifiers are ignored.
    pub async fn toggle_complete(&mut self, id: TaskId) {
        let result = self.store.toggle_complete(id).await;
        self.settle(StoreOperation::ToggleComplete, result);
    }

    /// Deletes a task permanently. Unknown identifiers are ignored.
    pub async fn delete(&mut self, id: TaskId) {
        let result = self.store.delete(id).await;
        if self.settle(StoreOperation::Delete, result) {
            tracing::info!(task_id = %id, "deleted task");
        }
    }

    /// Switches between list and grid layout.
    pub fn toggle_display_mode(&mut self) {
        self.state.send_modify(BoardState::toggle_display_mode);
    }

    /// Clears the current storage notice.
    pub fn dismiss_notice(&mut self) {
        self.state.send_if_modified(clear_notice);
    }

    /// Publishes the outcome of a store write and reports whether it
    /// succeeded.
    fn settle(&self, operation: StoreOperation, result: TaskStoreResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.state.send_if_modified(clear_notice);
                true
            }
            Err(err) => {
                tracing::warn!(?operation, error = %err, "task store write failed");
                let notice = StoreNotice::new(operation, err.to_string());
                self.state
                    .send_modify(|state| state.set_notice(Some(notice)));
                false
            }
        }
    }
}

impl<S> Drop for TaskBoard<S>
where
    S: TaskStore + 'static,
{
    fn drop(&mut self) {
        self.refresh.abort();
    }
}

fn set_compose_visible(state: &mut BoardState, visible: bool) -> bool {
    if state.is_compose_visible() == visible {
        return false;
    }
    state.set_compose_visible(visible);
    true
}

fn clear_notice(state: &mut BoardState) -> bool {
    if state.notice().is_none() {
        return false;
    }
    state.set_notice(None);
    true
}

async fn refresh_buckets<C>(
    mut updates: watch::Receiver<Vec<Task>>,
    state: Arc<watch::Sender<BoardState>>,
    clock: Arc<C>,
) where
    C: Clock + Send + Sync,
{
    while updates.changed().await.is_ok() {
        let tasks = updates.borrow_and_update().clone();
        let now = clock.local();
        tracing::debug!(tasks = tasks.len(), "recomputing task buckets");
        state.send_modify(|board| board.apply_snapshot(tasks, &now));
    }
    tracing::debug!("task store closed, bucket refresh stopped");
}
