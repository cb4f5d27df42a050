//! Client view-model: an in-memory task list plus a pending-input field.
//!
//! The list is a cache of the server's state, reconciled from responses —
//! never updated optimistically. The one exception is the pending input,
//! which is cleared the moment an add is submitted: the submitted text is
//! captured into the outgoing request at that point, so typing again while
//! the request is in flight can never corrupt it.
//!
//! State transitions (`load_ok`, `begin_add`, `add_ok`, `remove_ok`) are
//! synchronous and pure; the async drivers (`refresh`, `submit`, `remove`)
//! pair them with a [`TaskApi`]. A failed request is logged and leaves the
//! task list unchanged.

use tracing::warn;

use super::{Task, TaskApi};

#[derive(Debug, Default)]
pub struct TaskView {
    tasks: Vec<Task>,
    pending: String,
}

impl TaskView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Replace the cached list with a fresh server snapshot.
    pub fn load_ok(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Capture the pending input for an add request and clear the field.
    ///
    /// The returned string is the request payload; later edits to the
    /// pending field do not affect an add that is already in flight.
    pub fn begin_add(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }

    /// Append a server-confirmed task (with its assigned id) to the cache.
    pub fn add_ok(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Drop every cached entry with the given id after a confirmed delete.
    pub fn remove_ok(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
    }

    // ─── Async drivers ────────────────────────────────────────────────────

    /// Fetch the full list. On failure the cache is left as it was
    /// (empty on initial load). Returns whether the request succeeded.
    pub async fn refresh(&mut self, api: &dyn TaskApi) -> bool {
        match api.list().await {
            Ok(tasks) => {
                self.load_ok(tasks);
                true
            }
            Err(e) => {
                warn!(err = %e, "failed to fetch tasks");
                false
            }
        }
    }

    /// Submit the pending input as a new task.
    pub async fn submit(&mut self, api: &dyn TaskApi) -> bool {
        let text = self.begin_add();
        match api.create(&text, false).await {
            Ok(task) => {
                self.add_ok(task);
                true
            }
            Err(e) => {
                warn!(err = %e, "failed to add task");
                false
            }
        }
    }

    /// Delete a task by id and reconcile the cache.
    pub async fn remove(&mut self, api: &dyn TaskApi, id: &str) -> bool {
        match api.delete(id).await {
            Ok(()) => {
                self.remove_ok(id);
                true
            }
            Err(e) => {
                warn!(err = %e, "failed to delete task");
                false
            }
        }
    }
}
