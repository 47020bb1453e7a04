//! Command handlers for the CLI.

mod completions;
mod list;
mod notes;
mod prompt;
mod views;


use crate::domain::Note;

pub use completions::handle_completions;
pub use list::{handle_list, handle_read, handle_search};
pub use notes::{handle_add, handle_clear, handle_delete, handle_update};
pub use prompt::handle_prompt;
pub use views::{handle_latest, handle_pinned, handle_stats};

// ===========================================
// Shared Utilities
// ===========================================

const MESSAGE_WIDTH: usize = 48;

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// Two-letter flag column: `P` for pinned, `A` for archived.
pub(crate) fn note_flags(note: &Note) -> String {
    let pinned = if note.pinned() { 'P' } else { '-' };
    let archived = if note.archived() { 'A' } else { '-' };
    format!("{pinned}{archived}")
}

/// Comma-joined tag list, empty when the note has no tags.
pub(crate) fn note_tags(note: &Note) -> String {
    note.tags()
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders notes as a fixed-width table followed by a count line.
pub(crate) fn format_note_table(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found.".to_string();
    }

    let id_width = notes
        .iter()
        .map(|n| n.id().as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut lines = Vec::with_capacity(notes.len() + 4);
    lines.push(format!(
        "{:<id_width$}  {:<2}  {:<16}  {:<MESSAGE_WIDTH$}  {}",
        "ID", "", "Created", "Message", "Tags"
    ));
    lines.push(format!(
        "{}  {}  {}  {}  {}",
        "-".repeat(id_width),
        "--",
        "-".repeat(16),
        "-".repeat(MESSAGE_WIDTH),
        "----"
    ));

    for note in notes {
        let created = note.created_at().format("%Y-%m-%d %H:%M").to_string();
        let message = truncate_str(note.message(), MESSAGE_WIDTH);
        lines.push(
            format!(
                "{:<id_width$}  {:<2}  {:<16}  {:<MESSAGE_WIDTH$}  {}",
                note.id(),
                note_flags(note),
                created,
                message,
                note_tags(note)
            )
            .trim_end()
            .to_string(),
        );
    }

    lines.push(String::new());
    lines.push(format!("{} note(s)", notes.len()));
    lines.join("\n")
}

/// One-line description of a single note: `[id] message (tags: a,b)`.
pub(crate) fn format_note_line(note: &Note) -> String {
    let tags = note_tags(note);
    if tags.is_empty() {
        note.to_string()
    } else {
        format!("{note} (tags: {tags})")
    }
}
