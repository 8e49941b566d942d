//! whattodo-core
//!
//! Core building blocks for the whattodo task tracker.
//!
//! # Modules
//! - **domain**: Task / Board model, their records, status and errors
//! - **ports**: Clock and BoardStore seams
//! - **impls**: JSON file store and in-memory store
//! - **app**: BoardService, running one command against a store

pub mod app;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;

pub use app::{BoardService, TaskUpdate};
pub use domain::{Board, BoardError, BoardRecord, ParseError, Task, TaskRecord, TaskStatus};
pub use error::AppError;
pub use impls::{DEFAULT_DATA_FILE, InMemoryBoardStore, JsonFileStore};
pub use ports::{BoardStore, Clock, FixedClock, StoreError, SystemClock};
