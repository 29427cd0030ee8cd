//! Wire representation exchanged with the REST backend

use serde::{Deserialize, Serialize};

/// Task as serialized by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDto {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "completed")]
    pub is_completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
