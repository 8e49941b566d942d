//! App - application layer.
//!
//! Combines the ports into the operations the command line exposes.

pub mod board_service;

pub use self::board_service::{BoardService, TaskUpdate};
