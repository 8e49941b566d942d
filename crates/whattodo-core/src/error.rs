use thiserror::Error;

use crate::domain::{BoardError, ParseError};
use crate::ports::StoreError;

/// Errors surfaced by [`BoardService`](crate::app::BoardService).
#[derive(Debug, Error)]
pub enum AppError {
    /// Nothing stored yet: a board has to be created first.
    #[error("no board found")]
    NoBoard,

    #[error("nothing to update: give a new description or status")]
    EmptyUpdate,

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("stored board is invalid: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
