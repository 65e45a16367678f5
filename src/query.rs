//! Lookups by tag, by author and by textual id.

use crate::domain::{AuthorId, Note, NoteId, ParseNoteIdError, TagName};
use crate::store::{NoteStore, StoreError};
use thiserror::Error;

/// Errors from query operations.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("tag name cannot be empty")]
    EmptyTag,

    #[error(transparent)]
    InvalidId(#[from] ParseNoteIdError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read-side façade over a [`NoteStore`].
///
/// Rejects input that cannot name anything before the store is touched.
/// A lookup that matches nothing is an empty result, not an error.
#[derive(Debug, Clone, Copy)]
pub struct NoteQueries<'a> {
    store: &'a NoteStore,
}

impl<'a> NoteQueries<'a> {
    pub fn new(store: &'a NoteStore) -> Self {
        Self { store }
    }

    /// Returns the notes tagged `tag`, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::EmptyTag` for blank input.
    pub fn notes_by_tag(&self, tag: &str) -> Result<Vec<Note>, QueryError> {
        let tag = TagName::new(tag).map_err(|_| QueryError::EmptyTag)?;
        Ok(self.store.get_by_tag(&tag)?)
    }

    /// Returns the notes written by `author`, dropping stale ids.
    pub fn notes_by_author(&self, author: AuthorId) -> Result<Vec<Note>, QueryError> {
        let ids = self.store.get_by_author(author)?;
        Ok(self.store.resolve(&ids)?)
    }

    /// Returns the note ids recorded for `author`, in creation order.
    pub fn note_ids_by_author(&self, author: AuthorId) -> Result<Vec<NoteId>, QueryError> {
        Ok(self.store.get_by_author(author)?)
    }

    /// Looks up a note by its textual id.
    pub fn note(&self, id: &str) -> Result<Option<Note>, QueryError> {
        let id: NoteId = id.parse()?;
        Ok(self.store.get(&id)?)
    }
}
