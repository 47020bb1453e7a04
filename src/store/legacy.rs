//! Line-per-note plain text format used before the JSON store existed.

use crate::domain::Note;

/// Converts legacy text into notes, one per non-blank line.
///
/// Lines end at `\n`, `\r\n` or a bare `\r` and are trimmed. Each note gets
/// a fresh id, the current time, no tags, and both flags cleared.
pub fn parse_legacy(contents: &str) -> Vec<Note> {
    contents
        .split(['\r', '\n'])
        .filter_map(|line| Note::new(line, Vec::new(), false).ok())
        .collect()
}
