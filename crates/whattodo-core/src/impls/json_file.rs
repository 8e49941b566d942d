//! JsonFileStore - the board persisted as a JSON file.
//!
//! File shape:
//! ```json
//! {
//!     "name": "personal",
//!     "tasks": [
//!         { "description": "my first task", "status": false, "created_at": "2020-12-26 15:13:45" }
//!     ]
//! }
//! ```

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::BoardRecord;
use crate::ports::{BoardStore, StoreError};

/// File name used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "whattodo_data.json";

const INDENT: &[u8] = b"    ";

/// JsonFileStore keeps the board in a single JSON file.
///
/// # Behaviour
/// - Missing, empty or corrupt files load as `None` (corrupt ones are logged).
/// - Saves write a sibling `.tmp` file and rename it over the target, so a
///   crash mid-write leaves the previous board intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_DATA_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl BoardStore for JsonFileStore {
    fn load(&self) -> Result<Option<BoardRecord>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=board_load status=missing path={}",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(
                    "event=board_load status=corrupt path={} error={err}",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        if content.trim().is_empty() {
            debug!("event=board_load status=empty path={}", self.path.display());
            return Ok(None);
        }

        match serde_json::from_str::<BoardRecord>(&content) {
            Ok(record) => {
                debug!(
                    "event=board_load status=ok path={} tasks={}",
                    self.path.display(),
                    record.tasks.len()
                );
                Ok(Some(record))
            }
            Err(err) => {
                warn!(
                    "event=board_load status=corrupt path={} error={err}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&self, record: &BoardRecord) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        record.serialize(&mut serializer)?;
        buf.push(b'\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StoreError::io(parent, err))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &buf).map_err(|err| StoreError::io(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| StoreError::io(&self.path, err))?;

        debug!(
            "event=board_save status=ok path={} tasks={}",
            self.path.display(),
            record.tasks.len()
        );
        Ok(())
    }
}
