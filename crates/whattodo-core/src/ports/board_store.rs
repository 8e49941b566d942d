//! BoardStore port - persistence of the single active board.
//!
//! A store holds at most one [`BoardRecord`]. Implementations:
//! - [`JsonFileStore`](crate::impls::JsonFileStore): the on-disk JSON file
//! - [`InMemoryBoardStore`](crate::impls::InMemoryBoardStore): tests

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::BoardRecord;

/// BoardStore reads and overwrites the stored board record.
///
/// # Contract
/// - `load` returns `Ok(None)` when no board has been created yet. A missing,
///   empty or unreadable-as-board file counts as "not created".
/// - `save` replaces whatever was stored before.
pub trait BoardStore {
    fn load(&self) -> Result<Option<BoardRecord>, StoreError>;

    fn save(&self, record: &BoardRecord) -> Result<(), StoreError>;
}

impl<S: BoardStore + ?Sized> BoardStore for &S {
    fn load(&self) -> Result<Option<BoardRecord>, StoreError> {
        (**self).load()
    }

    fn save(&self, record: &BoardRecord) -> Result<(), StoreError> {
        (**self).save(record)
    }
}

/// Storage failures other than "nothing stored yet".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on `{}`: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode board: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
