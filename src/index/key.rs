//! Mapping between index keys and entry file names.

use crate::domain::{AuthorId, TagName};

const AUTHOR_FILE_PREFIX: &str = "Author_";

/// A key of a file-backed index.
///
/// Each key owns one entry file named `<file_stem>.txt`. The mapping must be
/// reversible so a directory scan can recover the keys.
pub trait IndexKey: Clone {
    /// Returns the file stem of this key's entry file.
    fn file_stem(&self) -> String;

    /// Recovers a key from an entry file stem, or `None` for foreign files.
    fn from_file_stem(stem: &str) -> Option<Self>;
}

impl IndexKey for TagName {
    fn file_stem(&self) -> String {
        self.as_str().to_string()
    }

    fn from_file_stem(stem: &str) -> Option<Self> {
        TagName::new(stem).ok()
    }
}

impl IndexKey for AuthorId {
    fn file_stem(&self) -> String {
        format!("{AUTHOR_FILE_PREFIX}{self}")
    }

    fn from_file_stem(stem: &str) -> Option<Self> {
        stem.strip_prefix(AUTHOR_FILE_PREFIX)?.parse().ok()
    }
}
