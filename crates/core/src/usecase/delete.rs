//! Delete use-case

use std::sync::Arc;

use tracing::debug;

use super::TASK_ID_EMPTY;
use crate::task::TaskRepository;
use crate::{Error, Result};

/// Removes a task permanently
#[derive(Clone)]
pub struct DeleteTaskUseCase {
    repository: Arc<dyn TaskRepository>,
}

impl DeleteTaskUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn invoke(&self, id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(Error::validation(TASK_ID_EMPTY));
        }

        debug!("Deleting task {}", id);
        self.repository.delete_task(id).await
    }
}
