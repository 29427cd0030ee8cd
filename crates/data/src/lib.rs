//! Data layer for the CleanSlate task client
//!
//! This crate provides the two `TaskRepository` implementations
//! (REST and in-memory), the wire object and its mapper, and the
//! environment-driven configuration that picks between them.

mod backend;
mod config;
mod dto;
mod mapper;
mod memory;
mod remote;
mod seed;

pub use backend::TaskBackend;
pub use config::{ConfigError, DataConfig, DataSource, DEFAULT_API_URL};
pub use dto::TaskDto;
pub use mapper::{to_domain, to_wire};
pub use memory::{InMemoryTaskRepository, MockTaskStore};
pub use remote::RemoteTaskRepository;
pub use seed::demo_tasks;
