//! Use-cases
//!
//! One type per application operation. Each wraps a single repository call
//! and owns the validation that must happen before any I/O.

mod create;
mod delete;
mod get;
mod update;

use std::sync::Arc;

use futures::stream::BoxStream;

use crate::task::TaskRepository;
use crate::{Result, SharedClock};

pub use create::CreateTaskUseCase;
pub use delete::DeleteTaskUseCase;
pub use get::{GetTaskByIdUseCase, GetTasksUseCase};
pub use update::UpdateTaskUseCase;

/// Lazy read result: yields one value then completes.
pub type TaskStream<T> = BoxStream<'static, Result<T>>;

pub(crate) const TITLE_EMPTY: &str = "Title cannot be empty";
pub(crate) const TASK_ID_EMPTY: &str = "Task ID cannot be empty";

/// All task use-cases wired to one repository and clock
#[derive(Clone)]
pub struct TaskUseCases {
    pub get_tasks: GetTasksUseCase,
    pub get_task_by_id: GetTaskByIdUseCase,
    pub create_task: CreateTaskUseCase,
    pub update_task: UpdateTaskUseCase,
    pub delete_task: DeleteTaskUseCase,
}

impl TaskUseCases {
    pub fn new(repository: Arc<dyn TaskRepository>, clock: SharedClock) -> Self {
        Self {
            get_tasks: GetTasksUseCase::new(Arc::clone(&repository)),
            get_task_by_id: GetTaskByIdUseCase::new(Arc::clone(&repository)),
            create_task: CreateTaskUseCase::new(Arc::clone(&repository), Arc::clone(&clock)),
            update_task: UpdateTaskUseCase::new(Arc::clone(&repository), clock),
            delete_task: DeleteTaskUseCase::new(repository),
        }
    }
}
