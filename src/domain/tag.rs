//! Case-insensitive tag type and comma-separated tag list parsing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A case-insensitive label attached to a note.
///
/// Tags are normalized to lowercase with surrounding whitespace trimmed, so
/// `Work`, ` work ` and `WORK` are the same tag. Unlike messages, tags carry no
/// character restrictions beyond being non-empty.
///
/// Tags order lexicographically by their normalized value, which is the order
/// they are stored in.
///
/// # Examples
///
/// ```
/// use sticky::domain::Tag;
///
/// let tag = Tag::new(" Urgent ").unwrap();
/// assert_eq!(tag.as_str(), "urgent");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored lowercase

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses a comma-separated tag list.
    ///
    /// Each entry is trimmed and lowercased; blank entries are dropped and
    /// duplicates collapse. The result is sorted. `None` and the empty string
    /// both yield an empty list.
    ///
    /// ```
    /// use sticky::domain::Tag;
    ///
    /// let tags = Tag::parse_list(Some("Work, urgent, work"));
    /// let names: Vec<&str> = tags.iter().map(Tag::as_str).collect();
    /// assert_eq!(names, ["urgent", "work"]);
    /// ```
    pub fn parse_list(raw: Option<&str>) -> Vec<Tag> {
        let Some(raw) = raw else {
            return Vec::new();
        };

        raw.split(',')
            .filter_map(|part| Tag::new(part).ok())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
