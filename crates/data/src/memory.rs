//! In-memory task repository
//!
//! Backs offline and demo builds. The task list lives in a `MockTaskStore`
//! that the caller creates and passes in, so several repositories (or a
//! test) can share one store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use cleanslate_core::clock::now_millis;
use cleanslate_core::task::{MissingTaskPolicy, Task, TaskRepository};
use cleanslate_core::{Error, Result, SharedClock};

use crate::seed::demo_tasks;

/// Shared, ordered task list
#[derive(Debug, Clone, Default)]
pub struct MockTaskStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MockTaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tasks` in the given order
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    /// Create a store preloaded with the demo tasks, timed relative to `now`
    pub fn seeded(now: i64) -> Self {
        Self::with_tasks(demo_tasks(now))
    }

    /// Copy of the current contents
    pub async fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }
}

/// Task repository over a `MockTaskStore`
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    store: MockTaskStore,
    clock: SharedClock,
    missing_task_policy: MissingTaskPolicy,
}

impl InMemoryTaskRepository {
    pub fn new(store: MockTaskStore, clock: SharedClock) -> Self {
        Self {
            store,
            clock,
            missing_task_policy: MissingTaskPolicy::default(),
        }
    }

    /// Set how deletes of unknown ids are reported
    pub fn with_missing_task_policy(mut self, policy: MissingTaskPolicy) -> Self {
        self.missing_task_policy = policy;
        self
    }

    pub fn store(&self) -> &MockTaskStore {
        &self.store
    }

    fn now(&self) -> i64 {
        now_millis(&*self.clock)
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.store.snapshot().await)
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        let tasks = self.store.tasks.read().await;
        tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    async fn create_task(&self, draft: Task) -> Result<Task> {
        let now = self.now();
        let id = if draft.is_new() {
            Uuid::new_v4().to_string()
        } else {
            draft.id.clone()
        };
        let task = Task {
            id,
            created_at: now,
            updated_at: now,
            ..draft
        };

        let mut tasks = self.store.tasks.write().await;
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(Error::storage(format!(
                "Task with ID {} already exists",
                task.id
            )));
        }
        tasks.push(task.clone());
        info!("Created task {}", task.id);
        Ok(task)
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        let now = self.now();
        let mut tasks = self.store.tasks.write().await;
        let slot = tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| Error::not_found(task.id.as_str()))?;

        // id and created_at belong to the stored record; updated_at never
        // moves backwards.
        let updated = Task {
            id: slot.id.clone(),
            created_at: slot.created_at,
            updated_at: now.max(task.updated_at).max(slot.created_at),
            ..task
        };
        *slot = updated.clone();
        debug!("Updated task {}", updated.id);
        Ok(updated)
    }

    async fn delete_task(&self, id: &str) -> Result<()> {
        let mut tasks = self.store.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);

        if tasks.len() == before {
            return match self.missing_task_policy {
                MissingTaskPolicy::Fail => Err(Error::not_found(id)),
                MissingTaskPolicy::Ignore => {
                    debug!("Task {} already absent", id);
                    Ok(())
                }
            };
        }
        info!("Deleted task {}", id);
        Ok(())
    }
}
