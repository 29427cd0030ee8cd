//! Update use-case

use std::sync::Arc;

use tracing::debug;

use super::TITLE_EMPTY;
use crate::clock::now_millis;
use crate::task::{Task, TaskRepository};
use crate::{Error, Result, SharedClock};

/// Replaces a task's editable fields
#[derive(Clone)]
pub struct UpdateTaskUseCase {
    repository: Arc<dyn TaskRepository>,
    clock: SharedClock,
}

impl UpdateTaskUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>, clock: SharedClock) -> Self {
        Self { repository, clock }
    }

    /// Re-stamps `updated_at` before delegating; the stamp never moves
    /// backwards, even when the local clock lags the server.
    pub async fn invoke(&self, mut task: Task) -> Result<Task> {
        if task.title.trim().is_empty() {
            return Err(Error::validation(TITLE_EMPTY));
        }

        task.updated_at = now_millis(&*self.clock).max(task.updated_at);
        debug!("Updating task {}", task.id);
        self.repository.update_task(task).await
    }
}
