//! Repository double whose calls park until the test lets them through

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, Semaphore};

use cleanslate_core::task::{Task, TaskRepository};
use cleanslate_core::{Error, Result};

/// Each call reports its name on `entered`, then waits for one permit from
/// `release`. Lets a test observe state while a call is in flight.
pub(crate) struct GatedRepository {
    tasks: Vec<Task>,
    entered: mpsc::UnboundedSender<&'static str>,
    gate: Arc<Semaphore>,
}

pub(crate) struct Gate {
    pub(crate) entered: mpsc::UnboundedReceiver<&'static str>,
    semaphore: Arc<Semaphore>,
}

impl Gate {
    pub(crate) fn release(&self) {
        self.semaphore.add_permits(1);
    }
}

impl GatedRepository {
    pub(crate) fn new(tasks: Vec<Task>) -> (Self, Gate) {
        let (entered, entered_rx) = mpsc::unbounded_channel();
        let semaphore = Arc::new(Semaphore::new(0));
        let repository = Self {
            tasks,
            entered,
            gate: Arc::clone(&semaphore),
        };
        let gate = Gate {
            entered: entered_rx,
            semaphore,
        };
        (repository, gate)
    }

    async fn pass(&self, call: &'static str) {
        let _ = self.entered.send(call);
        if let Ok(permit) = self.gate.acquire().await {
            permit.forget();
        }
    }
}

#[async_trait]
impl TaskRepository for GatedRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.pass("list").await;
        Ok(self.tasks.clone())
    }

    async fn get_task(&self, id: &str) -> Result<Task> {
        self.pass("get").await;
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }

    async fn create_task(&self, draft: Task) -> Result<Task> {
        self.pass("create").await;
        Ok(draft.with_id("created"))
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        self.pass("update").await;
        Ok(task)
    }

    async fn delete_task(&self, _id: &str) -> Result<()> {
        self.pass("delete").await;
        Ok(())
    }
}
