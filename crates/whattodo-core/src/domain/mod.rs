//! Domain model (tasks, boards, their records and errors).
//!
//! Pure values: nothing here performs I/O or logs.

pub mod board;
pub mod errors;
pub mod record;
pub mod status;
pub mod task;
pub mod timestamp;

pub use self::board::Board;
pub use self::errors::{BoardError, EMPTY_BOARD_MESSAGE, ParseError};
pub use self::record::{BoardRecord, TaskRecord};
pub use self::status::TaskStatus;
pub use self::task::Task;
pub use self::timestamp::{CREATED_AT_FORMAT, format_created_at, parse_created_at};
