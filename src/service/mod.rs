//! Note operations on top of a `NoteRepository`.
//!
//! Every operation loads the full collection, works on it in memory, and
//! (for mutations) writes it back. Validation runs before anything is
//! persisted, so a failed operation leaves the store untouched.

pub mod prompts;
pub mod views;

use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::domain::{Note, Tag};
use crate::store::{NoteRepository, StoreError};
pub use views::NoteStats;

/// Page size used by `list_notes` when the caller does not pick one.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Errors raised by note operations.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note message cannot be empty")]
    EmptyMessage,

    #[error("updated message cannot be empty")]
    EmptyUpdatedMessage,

    #[error("note not found: {id}")]
    NotFound { id: String },

    #[error("query must not be empty")]
    EmptyQuery,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for note operations.
pub type NoteResult<T> = Result<T, NoteError>;

/// Filters and paging for `list_notes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Maximum number of notes returned; negative values behave as zero.
    pub limit: i64,
    /// Number of matching notes skipped before the page starts.
    pub offset: usize,
    /// Only notes carrying this tag (case-insensitive). Blank means no filter.
    pub tag: Option<String>,
    pub pinned_only: bool,
    pub include_archived: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
            tag: None,
            pinned_only: false,
            include_archived: false,
        }
    }
}

/// Field changes for `update_note`. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteUpdate {
    pub message: Option<String>,
    /// Comma-separated tag list replacing the current tags; empty clears them.
    pub tags: Option<String>,
    pub pinned: Option<bool>,
    pub archived: Option<bool>,
}

/// Outcome of `clear_notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClearSummary {
    pub archived_only: bool,
    pub removed: usize,
}

impl fmt::Display for ClearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.archived_only {
            write!(f, "Archived notes cleared.")
        } else {
            write!(f, "All notes cleared.")
        }
    }
}

/// Note operations over an owned repository handle.
///
/// ```no_run
/// use sticky::service::NoteService;
/// use sticky::store::JsonNoteStore;
/// use std::path::Path;
///
/// let service = NoteService::new(JsonNoteStore::open(Path::new("/tmp/sticky")));
/// let note = service.add_note("Buy milk", Some("errands"), false)?;
/// assert_eq!(service.read_notes(false)?.first(), Some(&note));
/// # Ok::<(), sticky::service::NoteError>(())
/// ```
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Creates a note and appends it to the store.
    ///
    /// # Errors
    ///
    /// `NoteError::EmptyMessage` if `message` is blank.
    pub fn add_note(&self, message: &str, tags: Option<&str>, pinned: bool) -> NoteResult<Note> {
        let note = Note::new(message, Tag::parse_list(tags), pinned)
            .map_err(|_| NoteError::EmptyMessage)?;

        let mut notes = self.repo.load()?;
        notes.push(note.clone());
        self.repo.save(&notes)?;

        info!(id = %note.id(), "added note");
        Ok(note)
    }

    /// Returns visible notes, newest first.
    pub fn read_notes(&self, include_archived: bool) -> NoteResult<Vec<Note>> {
        let mut notes = visible(self.repo.load()?, include_archived);
        sort_newest_first(&mut notes);
        Ok(notes)
    }

    /// Returns one page of filtered notes, newest first.
    pub fn list_notes(&self, query: &ListQuery) -> NoteResult<Vec<Note>> {
        let mut notes = visible(self.repo.load()?, query.include_archived);

        if let Some(tag) = query.tag.as_deref().and_then(|t| Tag::new(t).ok()) {
            notes.retain(|n| n.has_tag(&tag));
        }
        if query.pinned_only {
            notes.retain(Note::pinned);
        }

        sort_newest_first(&mut notes);

        let limit = usize::try_from(query.limit.max(0)).unwrap_or(usize::MAX);
        Ok(notes.into_iter().skip(query.offset).take(limit).collect())
    }

    /// Finds notes whose message or tags contain `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// `NoteError::EmptyQuery` if `query` is blank.
    pub fn search_notes(&self, query: &str, include_archived: bool) -> NoteResult<Vec<Note>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(NoteError::EmptyQuery);
        }

        let mut notes = visible(self.repo.load()?, include_archived);
        notes.retain(|n| n.matches(&needle));
        sort_newest_first(&mut notes);
        Ok(notes)
    }

    /// Applies `changes` to the note with the given id.
    ///
    /// # Errors
    ///
    /// `NoteError::NotFound` if no note has `id`;
    /// `NoteError::EmptyUpdatedMessage` if a blank message is supplied.
    pub fn update_note(&self, id: &str, changes: NoteUpdate) -> NoteResult<Note> {
        let mut notes = self.repo.load()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id().as_str() == id)
            .ok_or_else(|| NoteError::NotFound { id: id.to_string() })?;

        if let Some(message) = &changes.message {
            note.set_message(message)
                .map_err(|_| NoteError::EmptyUpdatedMessage)?;
        }
        if let Some(tags) = &changes.tags {
            note.set_tags(Tag::parse_list(Some(tags)));
        }
        if let Some(pinned) = changes.pinned {
            note.set_pinned(pinned);
        }
        if let Some(archived) = changes.archived {
            note.set_archived(archived);
        }

        let updated = note.clone();
        self.repo.save(&notes)?;

        info!(id = %updated.id(), "updated note");
        Ok(updated)
    }

    /// Permanently removes the note with the given id and returns it.
    ///
    /// # Errors
    ///
    /// `NoteError::NotFound` if no note has `id`.
    pub fn delete_note(&self, id: &str) -> NoteResult<Note> {
        let mut notes = self.repo.load()?;
        let position = notes
            .iter()
            .position(|n| n.id().as_str() == id)
            .ok_or_else(|| NoteError::NotFound { id: id.to_string() })?;

        let removed = notes.remove(position);
        self.repo.save(&notes)?;

        info!(id = %removed.id(), "deleted note");
        Ok(removed)
    }

    /// Removes archived notes, or every note when `archived_only` is false.
    pub fn clear_notes(&self, archived_only: bool) -> NoteResult<ClearSummary> {
        let mut notes = self.repo.load()?;
        let before = notes.len();

        if archived_only {
            notes.retain(|n| !n.archived());
        } else {
            notes.clear();
        }
        self.repo.save(&notes)?;

        let summary = ClearSummary {
            archived_only,
            removed: before - notes.len(),
        };
        info!(archived_only, removed = summary.removed, "cleared notes");
        Ok(summary)
    }

    /// The most recently created active note.
    pub fn latest_note(&self) -> NoteResult<Option<Note>> {
        let notes = self.repo.load()?;
        Ok(views::latest(&notes).cloned())
    }

    /// Active pinned notes in stored order.
    pub fn pinned_notes(&self) -> NoteResult<Vec<Note>> {
        let notes = self.repo.load()?;
        Ok(views::pinned(&notes).into_iter().cloned().collect())
    }

    pub fn stats(&self) -> NoteResult<NoteStats> {
        Ok(NoteStats::from_notes(&self.repo.load()?))
    }

    /// Prompt asking for a summary of the active notes.
    pub fn summary_prompt(&self) -> NoteResult<String> {
        let active = visible(self.repo.load()?, false);
        Ok(prompts::summary_prompt(&active))
    }

    /// Prompt asking for a roadmap built from active notes, optionally by tag.
    pub fn roadmap_prompt(&self, target_tag: Option<&str>) -> NoteResult<String> {
        let active = visible(self.repo.load()?, false);
        Ok(prompts::roadmap_prompt(&active, target_tag))
    }
}

fn visible(mut notes: Vec<Note>, include_archived: bool) -> Vec<Note> {
    if !include_archived {
        notes.retain(|n| !n.archived());
    }
    notes
}

/// Stable sort, so notes sharing a timestamp keep their stored order.
fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by_key(|n| Reverse(n.created_at()));
}
