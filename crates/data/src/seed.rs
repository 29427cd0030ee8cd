//! Demo tasks for offline builds

use uuid::Uuid;

use cleanslate_core::task::Task;

const HOUR_MS: i64 = 60 * 60 * 1000;

/// The tasks an offline build starts with, timed relative to `now`
pub fn demo_tasks(now: i64) -> Vec<Task> {
    let task = |title: &str, description: &str, created_hours_ago: i64, updated_hours_ago: i64| {
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            is_completed: false,
            created_at: now - created_hours_ago * HOUR_MS,
            updated_at: now - updated_hours_ago * HOUR_MS,
        }
    };

    vec![
        task(
            "Complete Project Setup",
            "Set up the development environment and project structure",
            24,
            12,
        )
        .completed(true),
        task(
            "Implement Task List UI",
            "Create the main task list screen",
            12,
            6,
        ),
        task(
            "Add Task Creation",
            "Implement the task creation functionality",
            6,
            3,
        ),
        task(
            "Write Unit Tests",
            "Add unit tests for the task management features",
            3,
            0,
        ),
    ]
}
