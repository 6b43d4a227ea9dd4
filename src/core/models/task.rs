use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ColumnId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A text card. `column_id` only changes when a drag reparents the task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    pub fn new(column_id: ColumnId, content: String) -> Self {
        Self {
            id: TaskId::new(),
            column_id,
            content,
        }
    }

    pub fn update_content(&mut self, content: String) {
        self.content = content;
    }
}
