//! InMemoryBoardStore - a store that never touches disk.

use std::cell::{Cell, RefCell};

use crate::domain::BoardRecord;
use crate::ports::{BoardStore, StoreError};

/// Holds the record in memory and counts saves.
///
/// Single-threaded by construction (`RefCell`), like the rest of the tool.
#[derive(Debug, Default)]
pub struct InMemoryBoardStore {
    record: RefCell<Option<BoardRecord>>,
    saves: Cell<usize>,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: BoardRecord) -> Self {
        Self {
            record: RefCell::new(Some(record)),
            saves: Cell::new(0),
        }
    }

    /// Copy of what is currently stored.
    pub fn snapshot(&self) -> Option<BoardRecord> {
        self.record.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl BoardStore for InMemoryBoardStore {
    fn load(&self) -> Result<Option<BoardRecord>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, record: &BoardRecord) -> Result<(), StoreError> {
        *self.record.borrow_mut() = Some(record.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        let store = InMemoryBoardStore::new();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let store = InMemoryBoardStore::with_record(BoardRecord {
            name: "old".to_string(),
            tasks: vec![],
        });
        let record = BoardRecord {
            name: "new".to_string(),
            tasks: vec![],
        };

        store.save(&record).unwrap();

        assert_eq!(store.load().unwrap(), Some(record));
        assert_eq!(store.save_count(), 1);
    }
}
