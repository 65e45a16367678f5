//! Directory layout under the storage root.

use crate::domain::NoteId;
use std::path::{Path, PathBuf};

/// Extension shared by record and index files.
pub const FILE_EXTENSION: &str = "txt";

const NOTES_DIR: &str = "notes";
const TAGS_DIR: &str = "tags";
const AUTHORS_DIR: &str = "authors";
const NOTE_FILE_PREFIX: &str = "Note_";

/// Resolves every path the store touches from one root directory.
///
/// ```text
/// <root>/notes/Note_<uuid>.txt
/// <root>/tags/<tag>.txt
/// <root>/authors/Author_<id>.txt
/// ```
#[derive(Debug, Clone)]
pub struct StorageLayout {
    root: PathBuf,
}

impl StorageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_dir(&self) -> PathBuf {
        self.root.join(NOTES_DIR)
    }

    pub fn tags_dir(&self) -> PathBuf {
        self.root.join(TAGS_DIR)
    }

    pub fn authors_dir(&self) -> PathBuf {
        self.root.join(AUTHORS_DIR)
    }

    /// Path of the record file for a note.
    pub fn note_path(&self, id: &NoteId) -> PathBuf {
        self.notes_dir()
            .join(format!("{NOTE_FILE_PREFIX}{id}.{FILE_EXTENSION}"))
    }
}
