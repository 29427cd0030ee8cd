//! Repository selection
//!
//! Exactly one of the two repositories is picked when the application is
//! composed; nothing branches on the source afterwards.

use async_trait::async_trait;
use tracing::info;

use cleanslate_core::clock::now_millis;
use cleanslate_core::task::{Task, TaskRepository};
use cleanslate_core::{Result, SharedClock};

use crate::config::{DataConfig, DataSource};
use crate::memory::{InMemoryTaskRepository, MockTaskStore};
use crate::remote::RemoteTaskRepository;

/// The repository chosen at composition time
#[derive(Clone)]
pub enum TaskBackend {
    Remote(RemoteTaskRepository),
    InMemory(InMemoryTaskRepository),
}

impl TaskBackend {
    /// Build the backend described by `config`. The in-memory variant starts
    /// from the demo tasks.
    pub fn from_config(config: &DataConfig, clock: SharedClock) -> Self {
        match config.source {
            DataSource::Remote => {
                info!("Using remote task backend at {}", config.base_url);
                Self::Remote(
                    RemoteTaskRepository::new(config.base_url.as_str())
                        .with_missing_task_policy(config.missing_task_policy),
                )
            }
            DataSource::Mock => {
                info!("Using in-memory task backend");
                let store = MockTaskStore::seeded(now_millis(&*clock));
                Self::InMemory(
                    InMemoryTaskRepository::new(store, clock)
                        .with_missing_task_policy(config.missing_task_policy),
                )
            }
        }
    }

    fn repository(&self) -> &dyn TaskRepository {
        match self {
            Self::Remote(repository) => repository,
            Self::InMemory(repository) => repository,
        }
    }
}

#[async_trait]
impl TaskRepository for TaskBackend {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.repository().list_tasks().await
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        self.repository().get_task(id).await
    }

    async fn create_task(&self, draft: Task) -> Result<Task> {
        self.repository().create_task(draft).await
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        self.repository().update_task(task).await
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        self.repository().delete_task(id).await
    }
}
