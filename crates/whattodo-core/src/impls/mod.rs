//! Impls - adapters for the ports.
//!
//! - **JsonFileStore**: the on-disk board file
//! - **InMemoryBoardStore**: test double

pub mod json_file;
pub mod memory;

pub use self::json_file::{DEFAULT_DATA_FILE, JsonFileStore};
pub use self::memory::InMemoryBoardStore;
