//! Note persistence: the `NoteRepository` trait and its JSON file implementation.

mod json;
mod legacy;

pub use json::{JsonNoteStore, LEGACY_FILE_NAME, STORE_FILE_NAME};
pub use legacy::parse_legacy;

use crate::domain::Note;
use crate::infra::FsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving notes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a store file failed.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// The notes could not be encoded as JSON.
    #[error("failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),

    /// The store file is not a valid note list (strict mode only).
    #[error("corrupt note store at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Whole-collection persistence for notes.
///
/// Every call reads or rewrites the complete note list; there is no partial
/// update and no locking between callers.
pub trait NoteRepository {
    /// Loads every note, in stored order.
    fn load(&self) -> StoreResult<Vec<Note>>;

    /// Replaces the stored collection with `notes`.
    fn save(&self, notes: &[Note]) -> StoreResult<()>;
}
