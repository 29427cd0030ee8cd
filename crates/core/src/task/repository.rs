//! Task repository trait
//!
//! Defines the interface for task storage operations. The data layer ships a
//! remote (REST) and an in-memory implementation.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for task CRUD operations
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Get a snapshot of all tasks in source order
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Get a task by ID
    ///
    /// Fails with `Error::NotFound` when no task has this id.
    async fn get_task(&self, id: &str) -> Result<Task>;

    /// Persist a new task and return the stored record
    ///
    /// A non-empty draft id is kept; otherwise the store assigns one. Both
    /// timestamps are stamped by the store.
    async fn create_task(&self, draft: Task) -> Result<Task>;

    /// Replace an existing task and return the stored record
    async fn update_task(&self, task: Task) -> Result<Task>;

    /// Delete a task by ID
    async fn delete_task(&self, id: &str) -> Result<()>;
}

/// What `delete_task` does when the id is unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingTaskPolicy {
    /// Fail with `Error::NotFound`
    #[default]
    Fail,
    /// Treat the delete as already done
    Ignore,
}
