//! Plain records: the persisted shape of tasks and boards.
//!
//! These carry no behaviour. Conversion to and from the domain types lives on
//! [`Task`](super::Task) and [`Board`](super::Board).

use serde::{Deserialize, Serialize};

/// `{"description": .., "status": bool, "created_at": "YYYY-MM-DD HH:MM:SS"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub description: String,
    pub status: bool,
    pub created_at: String,
}

/// `{"name": .., "tasks": [TaskRecord, ..]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}
