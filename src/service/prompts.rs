//! Prompt text assembled from active notes for a language model.

use crate::domain::{Note, Tag};

/// Builds a request to summarize the given notes.
///
/// Pinned notes are repeated in a trailing `Pinned:` section.
pub fn summary_prompt(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "There are no notes yet.".to_string();
    }

    let joined = join_messages(notes.iter());
    let pinned: Vec<&Note> = notes.iter().filter(|n| n.pinned()).collect();

    if pinned.is_empty() {
        format!("Summarize the current notes: {joined}")
    } else {
        let pinned_joined = join_messages(pinned.into_iter());
        format!("Summarize the current notes: {joined} | Pinned: {pinned_joined}")
    }
}

/// Builds a request to turn notes into a roadmap, one bullet per note.
///
/// With a target tag only notes carrying it are included and the header
/// names the tag as the caller wrote it. A blank tag is ignored.
pub fn roadmap_prompt(notes: &[Note], target_tag: Option<&str>) -> String {
    let target = target_tag.and_then(|raw| Tag::new(raw).ok().map(|tag| (raw, tag)));

    let selected: Vec<&Note> = match &target {
        Some((_, tag)) => notes.iter().filter(|n| n.has_tag(tag)).collect(),
        None => notes.iter().collect(),
    };

    if selected.is_empty() {
        return "There are no matching notes yet.".to_string();
    }

    let header = match &target {
        Some((raw, _)) => format!("Help organize the '{raw}' notes into a roadmap:"),
        None => "Help create a prioritized roadmap from these notes:".to_string(),
    };

    let mut lines = vec![header];
    lines.extend(selected.iter().map(|note| roadmap_line(note)));
    lines.join("\n")
}

fn roadmap_line(note: &Note) -> String {
    if note.tags().is_empty() {
        return format!("- {}", note.message());
    }
    let tags = note
        .tags()
        .iter()
        .map(Tag::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("- {} (tags: {tags})", note.message())
}

fn join_messages<'a>(notes: impl Iterator<Item = &'a Note>) -> String {
    notes.map(Note::message).collect::<Vec<_>>().join("; ")
}
