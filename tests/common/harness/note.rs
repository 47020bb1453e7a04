//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use sticky::domain::{Note, NoteId, Tag};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and timestamp, with a fluent API
/// for setting optional fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    message: String,
    created: DateTime<Utc>,
    tags: Vec<Tag>,
    pinned: bool,
    archived: bool,
}

impl TestNote {
    /// Creates a new test note with the given message, stamped now.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            message: message.into(),
            created: Utc::now(),
            tags: Vec::new(),
            pinned: false,
            archived: false,
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the creation time from an RFC 3339 string.
    pub fn created(mut self, rfc3339: &str) -> Self {
        self.created = DateTime::parse_from_rfc3339(rfc3339)
            .expect("Invalid timestamp")
            .with_timezone(&Utc);
        self
    }

    /// Moves the creation time `minutes` into the past.
    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.created = Utc::now() - Duration::minutes(minutes);
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(Tag::new(tag.as_ref()).expect("Invalid tag"));
        self
    }

    /// Marks the note as pinned.
    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    /// Marks the note as archived.
    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::builder(self.id.clone(), &self.message, self.created)
            .tags(self.tags.clone())
            .pinned(self.pinned)
            .archived(self.archived)
            .build()
            .expect("TestNote should always produce valid Note")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // TestNote Builder
    // ===========================================

    #[test]
    fn test_note_generates_id() {
        let note = TestNote::new("Test");
        assert_eq!(note.note_id().to_string().len(), 26, "Should generate a ULID");
    }

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new("Release checklist")
            .tag("Work")
            .tag("release")
            .pinned()
            .created("2024-03-01T09:00:00Z");

        let domain_note = note.to_note();
        assert_eq!(domain_note.message(), "Release checklist");
        assert_eq!(domain_note.tags().len(), 2);
        assert_eq!(domain_note.tags()[1].as_str(), "work");
        assert!(domain_note.pinned());
        assert!(!domain_note.archived());
        assert_eq!(
            domain_note.created_at().to_rfc3339(),
            "2024-03-01T09:00:00+00:00"
        );
    }

    #[test]
    fn test_note_custom_id() {
        let note = TestNote::new("Test").id("3f2a9c");
        assert_eq!(note.note_id().to_string(), "3f2a9c");
    }
}
