//! BoardService - one command against the stored board.
//!
//! Every operation follows the same cycle:
//! load record -> rebuild [`Board`] -> one domain operation -> record -> save.
//! Read-only operations skip the save. When nothing is stored, everything but
//! [`BoardService::create_board`] stops with [`AppError::NoBoard`] before the
//! domain is touched.

use log::{debug, info};

use crate::domain::{Board, Task, TaskStatus};
use crate::error::AppError;
use crate::ports::{BoardStore, Clock};

/// Changes to apply to an existing task. At least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            status: None,
        }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            description: None,
            status: Some(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.status.is_none()
    }

    fn apply(self, task: &mut Task) {
        if let Some(description) = self.description {
            task.set_description(description);
        }
        if let Some(status) = self.status {
            task.set_status(status);
        }
    }
}

/// Application service wiring a [`BoardStore`] and a [`Clock`].
pub struct BoardService<S, C> {
    store: S,
    clock: C,
}

impl<S: BoardStore, C: Clock> BoardService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a board has been created.
    pub fn has_board(&self) -> Result<bool, AppError> {
        Ok(self.store.load()?.is_some())
    }

    /// Current board, or [`AppError::NoBoard`].
    pub fn load_board(&self) -> Result<Board, AppError> {
        let record = self.store.load()?.ok_or(AppError::NoBoard)?;
        Ok(Board::try_from(record)?)
    }

    /// Stores a fresh, empty board, replacing any existing one.
    pub fn create_board(&self, name: &str) -> Result<Board, AppError> {
        let board = Board::new(name);
        self.store.save(&board.to_record())?;
        info!("event=board_create name={name}");
        Ok(board)
    }

    /// Appends a task stamped with the service clock; returns its index.
    pub fn add_task(&self, description: &str) -> Result<(usize, Task), AppError> {
        let mut board = self.load_board()?;
        let task = Task::new_at(description, self.clock.now());
        board.add(task.clone());
        let index = board.count_tasks() - 1;
        self.persist(&board)?;
        info!("event=task_add board={} index={index}", board.name());
        Ok((index, task))
    }

    /// Applies `update` to the task at `index`; returns the updated task.
    pub fn update_task(&self, index: usize, update: TaskUpdate) -> Result<Task, AppError> {
        if update.is_empty() {
            return Err(AppError::EmptyUpdate);
        }
        let mut board = self.load_board()?;
        let task = board.retrieve_task_mut(index)?;
        update.apply(task);
        let updated = task.clone();
        self.persist(&board)?;
        info!(
            "event=task_update board={} index={index} status={}",
            board.name(),
            updated.status()
        );
        Ok(updated)
    }

    /// Removes the task at `index`; returns it.
    pub fn remove_task(&self, index: usize) -> Result<Task, AppError> {
        let mut board = self.load_board()?;
        let removed = board.remove_task(index)?;
        self.persist(&board)?;
        info!("event=task_remove board={} index={index}", board.name());
        Ok(removed)
    }

    /// Drops every task; returns how many were removed.
    pub fn clean_tasks(&self) -> Result<usize, AppError> {
        let mut board = self.load_board()?;
        let removed = board.count_tasks();
        board.clean_tasks();
        self.persist(&board)?;
        info!("event=board_clean board={} removed={removed}", board.name());
        Ok(removed)
    }

    pub fn list_tasks(&self) -> Result<String, AppError> {
        Ok(self.load_board()?.list_tasks())
    }

    pub fn count_tasks(&self) -> Result<usize, AppError> {
        Ok(self.load_board()?.count_tasks())
    }

    fn persist(&self, board: &Board) -> Result<(), AppError> {
        debug!(
            "event=board_persist board={} tasks={}",
            board.name(),
            board.count_tasks()
        );
        self.store.save(&board.to_record())?;
        Ok(())
    }
}
