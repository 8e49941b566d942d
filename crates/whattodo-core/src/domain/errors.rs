//! Errors raised by the domain model.
//!
//! The domain never recovers from these: they propagate to the command layer,
//! which turns them into user-visible messages.

use thiserror::Error;

/// Message shown for an empty board, both in listings and in [`BoardError::EmptyBoard`].
pub const EMPTY_BOARD_MESSAGE: &str = "No tasks on this board!";

/// Index-addressing failures on a [`Board`](super::Board).
///
/// An empty board and a bad index on a non-empty board are distinct conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{}", EMPTY_BOARD_MESSAGE)]
    EmptyBoard,

    #[error("No tasks found at the index {0}")]
    IndexOutOfRange(usize),
}

/// Failures turning text into domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// `created_at` did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("invalid created_at `{value}`: expected YYYY-MM-DD HH:MM:SS")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// `created_at` parsed, but is not written in the canonical zero-padded form.
    #[error("created_at `{value}` is not in canonical YYYY-MM-DD HH:MM:SS form")]
    TimestampMismatch { value: String },

    /// Status token other than `done` / `not done`.
    #[error("unknown task status `{0}`: expected `done` or `not done`")]
    Status(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_error_messages() {
        assert_eq!(BoardError::EmptyBoard.to_string(), "No tasks on this board!");
        assert_eq!(
            BoardError::IndexOutOfRange(5).to_string(),
            "No tasks found at the index 5"
        );
    }

    #[test]
    fn status_error_names_the_rejected_token() {
        let err = ParseError::Status("banana".to_string());
        assert!(err.to_string().contains("`banana`"));
    }
}
