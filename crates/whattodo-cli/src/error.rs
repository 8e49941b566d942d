use std::io;

use thiserror::Error;
use whattodo_core::AppError;

/// Errors ending a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Text shown to the user on stderr.
    pub fn user_message(&self) -> String {
        match self {
            CliError::App(AppError::NoBoard) => {
                "No board found, create one with `whattodo create <name>`".to_string()
            }
            other => other.to_string(),
        }
    }
}
