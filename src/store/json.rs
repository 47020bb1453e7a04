//! Single-file JSON note store with one-time legacy migration.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{NoteRepository, StoreError, StoreResult, parse_legacy};
use crate::domain::Note;
use crate::infra::{ensure_dir, read_text, to_vec_pretty_ascii, write_atomic};

/// File name of the JSON store inside a data directory.
pub const STORE_FILE_NAME: &str = "notes.json";

/// File name of the legacy line-per-note store inside a data directory.
pub const LEGACY_FILE_NAME: &str = "notes.txt";

/// Notes persisted as one pretty-printed JSON array.
///
/// The first load creates the file: from the legacy text file when one is
/// present, otherwise as an empty array. The legacy file is never modified.
///
/// A store file that does not parse as a note array loads as an empty
/// collection unless the store is strict, in which case it is an error.
#[derive(Debug, Clone)]
pub struct JsonNoteStore {
    path: PathBuf,
    legacy_path: PathBuf,
    strict: bool,
}

impl JsonNoteStore {
    /// Creates a store with explicit file locations.
    pub fn new(path: impl Into<PathBuf>, legacy_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            legacy_path: legacy_path.into(),
            strict: false,
        }
    }

    /// Creates a store using the standard file names inside `dir`.
    pub fn open(dir: &Path) -> Self {
        Self::new(dir.join(STORE_FILE_NAME), dir.join(LEGACY_FILE_NAME))
    }

    /// Sets whether a malformed store file is reported instead of read as empty.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path of the JSON store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the legacy text file consulted on first load.
    pub fn legacy_path(&self) -> &Path {
        &self.legacy_path
    }

    /// Creates the store file if it does not exist yet.
    fn ensure_initialized(&self) -> StoreResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        let notes = if self.legacy_path.is_file() {
            let contents = read_text(&self.legacy_path)?;
            let notes = parse_legacy(&contents);
            info!(
                legacy = %self.legacy_path.display(),
                count = notes.len(),
                "migrating legacy notes"
            );
            notes
        } else {
            debug!(path = %self.path.display(), "initializing empty note store");
            Vec::new()
        };

        self.save(&notes)
    }
}

impl NoteRepository for JsonNoteStore {
    fn load(&self) -> StoreResult<Vec<Note>> {
        self.ensure_initialized()?;

        let contents = read_text(&self.path)?;
        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&contents) {
            Ok(records) => records,
            Err(source) if self.strict => {
                return Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                });
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "note store is malformed, treating it as empty"
                );
                return Ok(Vec::new());
            }
        };

        let mut notes = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Note>(record) {
                Ok(note) => notes.push(note),
                Err(source) if self.strict => {
                    return Err(StoreError::Corrupt {
                        path: self.path.clone(),
                        source,
                    });
                }
                Err(err) => warn!(
                    path = %self.path.display(),
                    index,
                    error = %err,
                    "skipping invalid note record"
                ),
            }
        }

        debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }

        let bytes = to_vec_pretty_ascii(notes)?;
        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }
}
