//! Read use-cases

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use super::TaskStream;
use crate::task::{Task, TaskRepository};

/// Reads the full task list
#[derive(Clone)]
pub struct GetTasksUseCase {
    repository: Arc<dyn TaskRepository>,
}

impl GetTasksUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    /// Nothing is read until the stream is polled. Calling again issues a
    /// fresh read.
    pub fn invoke(&self) -> TaskStream<Vec<Task>> {
        let repository = Arc::clone(&self.repository);
        stream::once(async move { repository.list_tasks().await }).boxed()
    }
}

/// Reads one task
#[derive(Clone)]
pub struct GetTaskByIdUseCase {
    repository: Arc<dyn TaskRepository>,
}

impl GetTaskByIdUseCase {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self, id: impl Into<String>) -> TaskStream<Task> {
        let repository = Arc::clone(&self.repository);
        let id = id.into();
        stream::once(async move { repository.get_task(&id).await }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::MockTaskRepository;
    use crate::Error;
    use futures::TryStreamExt;

    fn task(id: &str) -> Task {
        Task::draft(format!("Task {id}"), "", 1_234_567_890).with_id(id)
    }

    #[tokio::test]
    async fn test_get_tasks_is_lazy_and_restartable() {
        let mut repository = MockTaskRepository::new();
        repository
            .expect_list_tasks()
            .times(2)
            .returning(|| Ok(vec![task("1"), task("2")]));
        let use_case = GetTasksUseCase::new(Arc::new(repository));

        // Building the stream alone must not touch the repository.
        let unused = use_case.invoke();
        drop(unused);

        let first: Vec<Vec<Task>> = use_case.invoke().try_collect().await.unwrap();
        let second: Vec<Vec<Task>> = use_case.invoke().try_collect().await.unwrap();

        assert_eq!(first, vec![vec![task("1"), task("2")]]);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_tasks_propagates_errors() {
        let mut repository = MockTaskRepository::new();
        repository
            .expect_list_tasks()
            .returning(|| Err(Error::transport("Network error")));
        let use_case = GetTasksUseCase::new(Arc::new(repository));

        let mut stream = use_case.invoke();
        let first = stream.next().await.unwrap();
        assert_eq!(first, Err(Error::transport("Network error")));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_get_task_by_id_passes_id_through() {
        let mut repository = MockTaskRepository::new();
        repository
            .expect_get_task()
            .withf(|id| id == "1")
            .times(1)
            .returning(|_| Ok(task("1")));
        let use_case = GetTaskByIdUseCase::new(Arc::new(repository));

        let found = use_case.invoke("1").try_next().await.unwrap();
        assert_eq!(found, Some(task("1")));
    }

    #[tokio::test]
    async fn test_get_task_by_id_not_found() {
        let mut repository = MockTaskRepository::new();
        repository
            .expect_get_task()
            .returning(|id| Err(Error::not_found(id)));
        let use_case = GetTaskByIdUseCase::new(Arc::new(repository));

        let result = use_case.invoke("missing").try_next().await;
        assert_eq!(result, Err(Error::not_found("missing")));
    }
}
