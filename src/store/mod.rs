//! Note store: record files plus the Tag and Author indexes they feed

mod note_store;

use crate::index::IndexError;
use crate::infra::{FsError, RecordError};
use std::path::PathBuf;
use thiserror::Error;

pub use note_store::NoteStore;

/// Errors from note store operations.
///
/// "Not found" is never an error: lookups return `None` or an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A note record exists but cannot be decoded.
    #[error("failed to decode note record at {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: RecordError,
    },

    /// A storage directory could not be created.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Result type for note store operations.
pub type StoreResult<T> = Result<T, StoreError>;
