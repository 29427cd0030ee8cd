//! Task module
//!
//! This module contains the task record and its storage port.

mod model;
mod repository;

pub use model::Task;
pub use repository::{MissingTaskPolicy, TaskRepository};

#[cfg(any(test, feature = "mocks"))]
pub use repository::MockTaskRepository;
