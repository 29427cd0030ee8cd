//! Plain-text rendering of screen state and effects

use chrono::{DateTime, Utc};

use cleanslate_core::task::Task;
use cleanslate_presentation::{TaskDetailEffect, TaskListEffect};

/// One line per task: completion box, id, title
pub fn task_line(task: &Task) -> String {
    let mark = if task.is_completed { "x" } else { " " };
    format!("[{mark}] {}  {}", task.id, task.title)
}

/// Full record, one field per line
pub fn task_details(task: &Task) -> Vec<String> {
    let mut lines = vec![task_line(task)];
    if !task.description.is_empty() {
        lines.push(format!("    {}", task.description));
    }
    lines.push(format!("    created: {}", timestamp(task.created_at)));
    lines.push(format!("    updated: {}", timestamp(task.updated_at)));
    lines
}

fn timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| millis.to_string())
}

pub fn list_effect(effect: &TaskListEffect) -> Option<String> {
    match effect {
        TaskListEffect::ShowError(message) => Some(format!("error: {message}")),
        TaskListEffect::TaskCreated => Some("Task created".to_string()),
        TaskListEffect::TaskUpdated => Some("Task updated".to_string()),
        TaskListEffect::TaskDeleted => Some("Task deleted".to_string()),
        TaskListEffect::NavigateToTaskDetail(_) => None,
    }
}

pub fn detail_effect(effect: &TaskDetailEffect) -> Option<String> {
    match effect {
        TaskDetailEffect::ShowError(message) => Some(format!("error: {message}")),
        TaskDetailEffect::TaskUpdated => Some("Task updated".to_string()),
        TaskDetailEffect::TaskDeleted => Some("Task deleted".to_string()),
        TaskDetailEffect::NavigateBack => None,
    }
}
