//! Note record: message, creation time, tags, and pinned/archived flags.

use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyMessage,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyMessage => {
                write!(f, "invalid note: message cannot be empty")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A single note in the store.
///
/// # Invariants
/// - `message` is trimmed and never empty.
/// - `tags` are sorted and free of duplicates.
/// - `created_at` never changes after construction.
///
/// Serialized with the field names `id`, `message`, `created_at`, `tags`,
/// `pinned`, `archived`. On deserialization the optional fields default to
/// empty/false and the invariants above are re-established.
///
/// # Examples
///
/// ```
/// use sticky::domain::{Note, Tag};
///
/// let note = Note::new("  Buy milk  ", Tag::parse_list(Some("errands")), false).unwrap();
/// assert_eq!(note.message(), "Buy milk");
/// assert!(!note.archived());
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NoteRecord")]
pub struct Note {
    id: NoteId,
    message: String,
    created_at: DateTime<Utc>,
    tags: Vec<Tag>,
    pinned: bool,
    archived: bool,
}

impl Note {
    /// Creates a fresh, unarchived note with a new id stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the message is empty or whitespace-only.
    pub fn new(
        message: impl Into<String>,
        tags: Vec<Tag>,
        pinned: bool,
    ) -> Result<Self, ParseNoteError> {
        Self::builder(NoteId::new(), message, Utc::now())
            .tags(tags)
            .pinned(pinned)
            .build()
    }

    /// Creates a builder for a note with an explicit id and creation time.
    pub fn builder(
        id: NoteId,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> NoteBuilder {
        NoteBuilder::new(id, message, created_at)
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn pinned(&self) -> bool {
        self.pinned
    }

    pub fn archived(&self) -> bool {
        self.archived
    }

    /// Returns true if the note carries the given tag.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.binary_search(tag).is_ok()
    }

    /// Case-insensitive substring match against the message or any tag.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.message.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.as_str().contains(needle))
    }

    /// Replaces the message.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` (leaving the note untouched) if the new
    /// message is empty or whitespace-only.
    pub fn set_message(&mut self, message: &str) -> Result<(), ParseNoteError> {
        self.message = normalize_message(message)?;
        Ok(())
    }

    /// Replaces the tag set.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = normalize_tags(tags);
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    pub fn set_archived(&mut self, archived: bool) {
        self.archived = archived;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.id, self.message)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("message", &self.message)
            .field("created_at", &self.created_at)
            .field("tags", &self.tags)
            .field("pinned", &self.pinned)
            .field("archived", &self.archived)
            .finish()
    }
}

/// Builder for constructing a Note with optional fields.
pub struct NoteBuilder {
    id: NoteId,
    message: String,
    created_at: DateTime<Utc>,
    tags: Vec<Tag>,
    pinned: bool,
    archived: bool,
}

impl NoteBuilder {
    fn new(id: NoteId, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message: message.into(),
            created_at,
            tags: Vec::new(),
            pinned: false,
            archived: false,
        }
    }

    /// Sets the note's tags. Duplicates are removed and the result sorted.
    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Builds the Note.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the message is empty or whitespace-only.
    pub fn build(self) -> Result<Note, ParseNoteError> {
        Ok(Note {
            id: self.id,
            message: normalize_message(&self.message)?,
            created_at: self.created_at,
            tags: normalize_tags(self.tags),
            pinned: self.pinned,
            archived: self.archived,
        })
    }
}

/// On-disk shape of a note, before invariants are checked.
#[derive(Deserialize)]
struct NoteRecord {
    id: NoteId,
    message: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    pinned: bool,
    #[serde(default)]
    archived: bool,
}

impl TryFrom<NoteRecord> for Note {
    type Error = ParseNoteError;

    fn try_from(record: NoteRecord) -> Result<Self, Self::Error> {
        Note::builder(record.id, record.message, record.created_at)
            .tags(record.tags)
            .pinned(record.pinned)
            .archived(record.archived)
            .build()
    }
}

fn normalize_message(message: &str) -> Result<String, ParseNoteError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ParseNoteError {
            kind: ParseNoteErrorKind::EmptyMessage,
        });
    }
    Ok(trimmed.to_string())
}

fn normalize_tags(tags: Vec<Tag>) -> Vec<Tag> {
    tags.into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
