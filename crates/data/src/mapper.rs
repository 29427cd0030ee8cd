//! Conversion between `TaskDto` and the domain `Task`
//!
//! This is the only place that knows both shapes. Every field maps one to
//! one so the conversion is lossless in both directions.

use cleanslate_core::task::Task;

use crate::dto::TaskDto;

pub fn to_domain(dto: TaskDto) -> Task {
    Task {
        id: dto.id,
        title: dto.title,
        description: dto.description,
        is_completed: dto.is_completed,
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    }
}

pub fn to_wire(task: Task) -> TaskDto {
    TaskDto {
        id: task.id,
        title: task.title,
        description: task.description,
        is_completed: task.is_completed,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}

impl From<TaskDto> for Task {
    fn from(dto: TaskDto) -> Self {
        to_domain(dto)
    }
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        to_wire(task)
    }
}
