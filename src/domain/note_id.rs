//! Opaque note identifier with ULID generation and serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// A unique identifier for notes.
///
/// Identifiers are opaque strings. Newly created notes get a ULID (26-character
/// Crockford Base32), but any non-blank string read back from the store is
/// accepted as-is, so ids written by older tooling (e.g. 32-character hex)
/// keep working.
///
/// # Examples
///
/// ```
/// use sticky::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.as_str().len(), 26);
///
/// let legacy: NoteId = "3f2b9c0d4e5f60718293a4b5c6d7e8f9".parse().unwrap();
/// assert_eq!(legacy.as_str(), "3f2b9c0d4e5f60718293a4b5c6d7e8f9");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing a blank identifier.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': id cannot be blank", self.value)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_creates_ulid_string() {
        let id = NoteId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 26, "ULID should be 26 characters");
        assert!(s.parse::<Ulid>().is_ok());
    }

    #[test]
    fn multiple_new_ids_are_unique() {
        let ids: Vec<NoteId> = (0..100).map(|_| NoteId::new()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "all generated IDs should be unique");
    }

    #[test]
    fn parse_accepts_legacy_hex_id() {
        let id: NoteId = "9b2e4c1f0a7d4e3b8c6f5a4d3e2b1c0a".parse().unwrap();
        assert_eq!(id.as_str(), "9b2e4c1f0a7d4e3b8c6f5a4d3e2b1c0a");
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: NoteId = "  abc  ".parse().unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn parse_rejects_blank() {
        let err = "   ".parse::<NoteId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid note id '   ': id cannot be blank");
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }

    #[test]
    fn serde_roundtrip() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).expect("should serialize");
        let parsed: NoteId = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(id, parsed);
    }
}
