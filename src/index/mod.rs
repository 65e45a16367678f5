//! File-backed Tag and Author indexes

mod file_index;
mod key;

use crate::domain::{AuthorId, TagName};
use crate::infra::FsError;
use std::path::PathBuf;
use thiserror::Error;

pub use file_index::FileIndex;
pub use key::IndexKey;

/// Tag name → note ids, one file per tag.
pub type TagIndex = FileIndex<TagName>;

/// Author id → note ids, one file per author.
pub type AuthorIndex = FileIndex<AuthorId>;

/// Errors that can occur during index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// An entry file holds a line that is not a note id.
    #[error("malformed index entry at {path}:{line}: '{value}'")]
    MalformedEntry {
        path: PathBuf,
        line: usize,
        value: String,
    },

    /// The index directory could not be created.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
