//! Read-only views derived from the note collection.

use serde::Serialize;

use crate::domain::Note;

/// Text returned by the latest view when there are no active notes.
pub const NO_NOTES_YET: &str = "No notes yet.";

/// Text returned by the pinned view when no active note is pinned.
pub const NO_PINNED_NOTES: &str = "No pinned notes.";

/// Note counts across the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NoteStats {
    pub total: usize,
    pub active: usize,
    pub archived: usize,
    /// Pinned notes among the active ones.
    pub pinned: usize,
}

impl NoteStats {
    pub fn from_notes(notes: &[Note]) -> Self {
        let active: Vec<&Note> = notes.iter().filter(|n| !n.archived()).collect();
        Self {
            total: notes.len(),
            active: active.len(),
            archived: notes.len() - active.len(),
            pinned: active.iter().filter(|n| n.pinned()).count(),
        }
    }
}

/// Most recently created active note; the earliest stored wins a tie.
pub fn latest(notes: &[Note]) -> Option<&Note> {
    notes
        .iter()
        .filter(|n| !n.archived())
        .rev()
        .max_by_key(|n| n.created_at())
}

/// Active pinned notes in stored order.
pub fn pinned(notes: &[Note]) -> Vec<&Note> {
    notes
        .iter()
        .filter(|n| !n.archived() && n.pinned())
        .collect()
}

/// Renders the latest view: the note's message, or a placeholder.
pub fn render_latest(note: Option<&Note>) -> String {
    match note {
        Some(note) => note.message().to_string(),
        None => NO_NOTES_YET.to_string(),
    }
}

/// Renders the pinned view as `[id] message` lines, or a placeholder.
pub fn render_pinned(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return NO_PINNED_NOTES.to_string();
    }
    notes
        .iter()
        .map(|n| format!("[{}] {}", n.id(), n.message()))
        .collect::<Vec<_>>()
        .join("\n")
}
