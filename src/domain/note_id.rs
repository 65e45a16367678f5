//! UUID-based note identifier with serde support.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for notes based on UUID.
///
/// Identifiers are chosen by the caller before a note is created; the store
/// never generates or rewrites them. The textual form is the lowercase
/// hyphenated UUID, which is also what appears in record and index files.
///
/// # Examples
///
/// ```
/// use notestore::domain::NoteId;
///
/// let id: NoteId = "a6d8fcf3-1256-4e9e-bc3d-7b41f2a01385".parse().unwrap();
/// assert_eq!(id.to_string(), "a6d8fcf3-1256-4e9e-bc3d-7b41f2a01385");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Creates a new random (v4) NoteId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0.hyphenated())
    }
}

/// Error returned when parsing an invalid UUID string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
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

    const KNOWN: &str = "a6d8fcf3-1256-4e9e-bc3d-7b41f2a01385";

    #[test]
    fn new_creates_hyphenated_uuid() {
        let s = NoteId::new().to_string();
        assert_eq!(s.len(), 36);
        assert_eq!(s.matches('-').count(), 4);
    }

    #[test]
    fn parse_valid_uuid_string() {
        let id: NoteId = KNOWN.parse().expect("should parse valid UUID");
        assert_eq!(id.to_string(), KNOWN);
    }

    #[test]
    fn parse_uppercase_displays_lowercase() {
        let id: NoteId = KNOWN.to_uppercase().parse().unwrap();
        assert_eq!(id.to_string(), KNOWN);
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        let id: NoteId = format!("  {KNOWN}\r").parse().unwrap();
        assert_eq!(id.to_string(), KNOWN);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("invalid_guid".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn equal_ids_hash_equally() {
        let a: NoteId = KNOWN.parse().unwrap();
        let b: NoteId = KNOWN.parse().unwrap();
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        set.insert(NoteId::new());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_format() {
        let id: NoteId = KNOWN.parse().unwrap();
        assert_eq!(format!("{:?}", id), format!("NoteId(\"{KNOWN}\")"));
    }

    #[test]
    fn parse_error_contains_invalid_value() {
        let err = "bad".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "bad");
        assert!(err.to_string().contains("'bad'"));
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let id: NoteId = KNOWN.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{KNOWN}\""));
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
