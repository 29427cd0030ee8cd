//! Create use-case

use std::sync::Arc;

use tracing::debug;

use super::TITLE_EMPTY;
use crate::clock::now_millis;
use crate::task::{Task, TaskRepository};
use crate::{Error, Result, SharedClock};

/// Creates a task from a title and description
#[derive(Clone)]
pub struct CreateTaskUseCase {
    repository: Arc<dyn TaskRepository>,
    clock: SharedClock,
}

impl CreateTaskUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>, clock: SharedClock) -> Self {
        Self { repository, clock }
    }

    /// Rejects a blank title before reaching the repository.
    pub async fn invoke(&self, title: &str, description: &str) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(Error::validation(TITLE_EMPTY));
        }

        let draft = Task::draft(title, description, now_millis(&*self.clock));
        debug!("Creating task {:?}", draft.title);
        self.repository.create_task(draft).await
    }
}
