//! Task model definitions

use serde::{Deserialize, Serialize};

/// A to-do item.
///
/// An empty `id` marks a draft that has not been persisted yet. Timestamps
/// are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Task {
    /// Create an unsaved draft stamped with `now`
    pub fn draft(title: impl Into<String>, description: impl Into<String>, now: i64) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: description.into(),
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the completion flag
    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Copy with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            is_completed: !self.is_completed,
            ..self.clone()
        }
    }

    /// Copy with title and description replaced
    pub fn edited(&self, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..self.clone()
        }
    }

    /// Whether the task still lacks a persisted id
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}
