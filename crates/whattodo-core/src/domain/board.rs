//! Board: a named, ordered collection of tasks.

use std::fmt;

use super::errors::{BoardError, EMPTY_BOARD_MESSAGE, ParseError};
use super::record::BoardRecord;
use super::task::Task;

const BANNER_RULE: &str =
    "=============================================================================";
const MIN_DESCRIPTION_WIDTH: usize = 40;

/// Named board owning its tasks.
///
/// Tasks have no identity besides their 0-based position, which follows
/// insertion order. Removing a task shifts the later ones down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    name: String,
    tasks: Vec<Task>,
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task. No duplicate check.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn count_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at a 0-based index.
    ///
    /// # Errors
    /// - [`BoardError::EmptyBoard`] when the board has no tasks.
    /// - [`BoardError::IndexOutOfRange`] when it has tasks but none at `index`.
    pub fn retrieve_task(&self, index: usize) -> Result<&Task, BoardError> {
        self.check_index(index)?;
        Ok(&self.tasks[index])
    }

    /// Mutable variant of [`Board::retrieve_task`], same errors.
    pub fn retrieve_task_mut(&mut self, index: usize) -> Result<&mut Task, BoardError> {
        self.check_index(index)?;
        Ok(&mut self.tasks[index])
    }

    /// Removes and returns the task at `index`, same errors as [`Board::retrieve_task`].
    pub fn remove_task(&mut self, index: usize) -> Result<Task, BoardError> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    /// Drops every task; the name stays.
    pub fn clean_tasks(&mut self) {
        self.tasks.clear();
    }

    /// Human-readable listing, same text as the `Display` impl.
    pub fn list_tasks(&self) -> String {
        self.to_string()
    }

    pub fn to_record(&self) -> BoardRecord {
        BoardRecord {
            name: self.name.clone(),
            tasks: self.tasks.iter().map(Task::to_record).collect(),
        }
    }

    /// Rebuilds a board, keeping task order. Stops at the first bad task.
    pub fn from_record(record: &BoardRecord) -> Result<Self, ParseError> {
        let tasks = record
            .tasks
            .iter()
            .map(Task::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: record.name.clone(),
            tasks,
        })
    }

    fn check_index(&self, index: usize) -> Result<(), BoardError> {
        if self.tasks.is_empty() {
            return Err(BoardError::EmptyBoard);
        }
        if index >= self.tasks.len() {
            return Err(BoardError::IndexOutOfRange(index));
        }
        Ok(())
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = ParseError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let tasks = record
            .tasks
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: record.name,
            tasks,
        })
    }
}

impl From<&Board> for BoardRecord {
    fn from(board: &Board) -> Self {
        board.to_record()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER_RULE}")?;
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{BANNER_RULE}")?;

        if self.tasks.is_empty() {
            return writeln!(f, "{EMPTY_BOARD_MESSAGE}");
        }

        let width = self
            .tasks
            .iter()
            .map(|task| task.description().chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_DESCRIPTION_WIDTH);

        for (index, task) in self.tasks.iter().enumerate() {
            writeln!(
                f,
                "{index:>3}  {:<width$}  {}  {}",
                task.description(),
                task.status_glyph(),
                task.created_at_display(),
            )?;
        }
        Ok(())
    }
}
