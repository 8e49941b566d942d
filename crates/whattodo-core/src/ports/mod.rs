//! Ports - seams between the application service and the outside world.
//!
//! - [`Clock`]: current time for new tasks
//! - [`BoardStore`]: where the board record lives

pub mod board_store;
pub mod clock;

pub use self::board_store::{BoardStore, StoreError};
pub use self::clock::{Clock, FixedClock, SystemClock};
