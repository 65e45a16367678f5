//! Case-insensitive tag name used as a Tag Index key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters that cannot appear in a portable file name.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest normalized tag name, in bytes. The entry file name `<tag>.txt`
/// must fit the common 255-byte file name limit.
pub const MAX_TAG_BYTES: usize = 255 - ".txt".len();

/// A case-insensitive tag name.
///
/// Tags are flat labels. Because each tag is stored as its own index file,
/// the name is normalized into something usable as a file name.
///
/// # Normalization
/// - Surrounding whitespace is trimmed
/// - Converted to lowercase
/// - Characters reserved in file names (and control characters) become `_`
/// - A leading `.` becomes `_`, since dot-files are skipped by directory scans
///
/// A name longer than [`MAX_TAG_BYTES`] after normalization is rejected.
///
/// The original casing is not preserved.
///
/// # Examples
///
/// ```
/// use notestore::domain::TagName;
///
/// let tag = TagName::new("TestTag").unwrap();
/// assert_eq!(tag.as_str(), "testtag");
///
/// let tag2 = TagName::new("TESTTAG").unwrap();
/// assert_eq!(tag, tag2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String); // Always stored normalized

/// Error returned when a tag name is blank or too long.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl TagName {
    /// Creates a new TagName from a string.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only, or if
    /// the normalized name exceeds [`MAX_TAG_BYTES`].
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTagError("tag name cannot be empty".to_string()));
        }

        let normalized: String = trimmed
            .to_lowercase()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if c.is_control() || RESERVED.contains(&c) || (i == 0 && c == '.') {
                    '_'
                } else {
                    c
                }
            })
            .collect();

        if normalized.len() > MAX_TAG_BYTES {
            return Err(ParseTagError(format!(
                "tag name is too long ({} bytes, at most {})",
                normalized.len(),
                MAX_TAG_BYTES
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagName(\"{}\")", self.0)
    }
}

impl FromStr for TagName {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TagName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
