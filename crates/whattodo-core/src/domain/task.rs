//! Task: a description, a completion status and a creation timestamp.

use std::fmt;

use chrono::{Local, NaiveDateTime};

use super::errors::ParseError;
use super::record::TaskRecord;
use super::status::TaskStatus;
use super::timestamp::{format_created_at, parse_created_at, truncate_to_seconds};

/// A single entry on a board.
///
/// `created_at` is fixed at construction (or taken from a stored record) and
/// has no setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    status: TaskStatus,
    created_at: NaiveDateTime,
}

impl Task {
    /// New task created now (local time), not done.
    pub fn new(description: impl Into<String>) -> Self {
        Self::new_at(description, Local::now().naive_local())
    }

    /// New task with an explicit creation time, truncated to whole seconds.
    pub fn new_at(description: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            description: description.into(),
            status: TaskStatus::NotDone,
            created_at: truncate_to_seconds(created_at),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Sets the status from a `done` / `not done` token.
    ///
    /// Unknown tokens are an error and leave the status untouched.
    pub fn set_status_token(&mut self, token: &str) -> Result<(), ParseError> {
        self.status = token.parse()?;
        Ok(())
    }

    pub fn status_glyph(&self) -> &'static str {
        self.status.glyph()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// `created_at` as `YYYY-MM-DD HH:MM:SS`.
    pub fn created_at_display(&self) -> String {
        format_created_at(self.created_at)
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            description: self.description.clone(),
            status: self.status.into(),
            created_at: self.created_at_display(),
        }
    }

    /// Rebuilds a task from its stored record.
    ///
    /// The status comes straight from the boolean flag; `created_at` must be
    /// in the exact stored pattern.
    pub fn from_record(record: &TaskRecord) -> Result<Self, ParseError> {
        Ok(Self {
            description: record.description.clone(),
            status: TaskStatus::from(record.status),
            created_at: parse_created_at(&record.created_at)?,
        })
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = ParseError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let created_at = parse_created_at(&record.created_at)?;
        Ok(Self {
            description: record.description,
            status: TaskStatus::from(record.status),
            created_at,
        })
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        task.to_record()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.status_glyph())
    }
}
