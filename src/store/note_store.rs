//! NoteStore: one record file per note, indexes derived on write and read.

use super::{StoreError, StoreResult};
use crate::domain::{AuthorId, Note, NoteId, TagName};
use crate::index::{AuthorIndex, TagIndex};
use crate::infra::{
    FILE_EXTENSION, FsError, StorageLayout, decode, encode, read_text, scan_files, write_atomic,
};
use std::path::{Path, PathBuf};

/// Persists notes as record files and keeps the Tag and Author indexes.
///
/// All operations are synchronous. The store holds no locks: record writes
/// are atomic renames and index writes are true appends, so a `NoteStore`
/// can be shared between threads as is.
#[derive(Debug, Clone)]
pub struct NoteStore {
    layout: StorageLayout,
    tags: TagIndex,
    authors: AuthorIndex,
}

impl NoteStore {
    /// Creates a store rooted at `root`.
    ///
    /// Nothing is touched on disk until the first write.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let layout = StorageLayout::new(root);
        let tags = TagIndex::new(layout.tags_dir());
        let authors = AuthorIndex::new(layout.authors_dir());
        Self {
            layout,
            tags,
            authors,
        }
    }

    /// Returns the storage layout.
    pub fn layout(&self) -> &StorageLayout {
        &self.layout
    }

    /// Returns the tag index.
    pub fn tag_index(&self) -> &TagIndex {
        &self.tags
    }

    /// Returns the author index.
    pub fn author_index(&self) -> &AuthorIndex {
        &self.authors
    }

    /// Persists a new note and indexes it.
    ///
    /// The record is written first, then the note id is appended to the Tag
    /// Index once per entry of `note.tags()` (duplicates included), then to
    /// the Author Index. A note without tags touches no tag entry.
    ///
    /// Returns the number of note records written, which is always `1`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on any I/O failure. Index appends that already
    /// happened before a failure are not rolled back.
    pub fn create(&self, note: &Note) -> StoreResult<usize> {
        let notes_dir = self.layout.notes_dir();
        std::fs::create_dir_all(&notes_dir).map_err(|source| StoreError::Io {
            path: notes_dir.clone(),
            source,
        })?;

        let path = self.layout.note_path(note.id());
        write_atomic(&path, &encode(note))?;
        log::info!("saved note {} to {}", note.id(), path.display());

        for tag in note.tags() {
            self.tags.append(tag, note.id())?;
            log::info!("associated note {} with tag {}", note.id(), tag);
        }

        self.authors.append(&note.author_id(), note.id())?;
        log::info!(
            "associated note {} with author {}",
            note.id(),
            note.author_id()
        );

        Ok(1)
    }

    /// Looks up a note by id.
    ///
    /// Returns `Ok(None)` if no record exists. The returned note's tags are
    /// the tag entries that reference it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Record` if the record exists but cannot be decoded.
    pub fn get(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        let path = self.layout.note_path(id);
        let Some(text) = read_text(&path)? else {
            log::debug!("note {} not found", id);
            return Ok(None);
        };

        let note = self.decode_with_tags(&path, &text)?;
        Ok(Some(note))
    }

    /// Returns every note that can be decoded.
    ///
    /// A record that fails to decode, or is not valid UTF-8, is logged and
    /// skipped. Records are visited in file-name order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` only for failures that are not tied to a single
    /// record, such as an unreadable notes directory or index.
    pub fn list_all(&self) -> StoreResult<Vec<Note>> {
        let files = scan_files(&self.layout.notes_dir(), FILE_EXTENSION)?;

        let mut notes = Vec::with_capacity(files.len());
        for path in files {
            let text = match read_text(&path) {
                Ok(Some(text)) => text,
                Ok(None) => continue,
                Err(err @ FsError::InvalidEncoding { .. }) => {
                    log::error!("skipping note record: {}", err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            match self.decode_with_tags(&path, &text) {
                Ok(note) => notes.push(note),
                Err(err @ StoreError::Record { .. }) => {
                    log::error!("skipping note record: {}", err);
                }
                Err(err) => return Err(err),
            }
        }

        log::debug!("listed {} notes", notes.len());
        Ok(notes)
    }

    /// Returns the notes referenced by a tag entry, in entry order.
    ///
    /// Ids that no longer resolve to a record are dropped.
    pub fn get_by_tag(&self, tag: &TagName) -> StoreResult<Vec<Note>> {
        let ids = self.tags.list(tag)?;
        log::debug!("tag {} references {} notes", tag, ids.len());
        self.resolve(&ids)
    }

    /// Returns the ids recorded for an author, in append order.
    pub fn get_by_author(&self, author: AuthorId) -> StoreResult<Vec<NoteId>> {
        let ids = self.authors.list(&author)?;
        log::debug!("author {} references {} notes", author, ids.len());
        Ok(ids)
    }

    /// Resolves ids to notes, dropping stale ones.
    pub fn resolve(&self, ids: &[NoteId]) -> StoreResult<Vec<Note>> {
        let mut notes = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get(id)? {
                Some(note) => notes.push(note),
                None => log::warn!("index references missing note {}", id),
            }
        }
        Ok(notes)
    }

    /// Returns every known tag with the length of its entry.
    pub fn tags(&self) -> StoreResult<Vec<(TagName, usize)>> {
        Ok(self.tags.counts()?)
    }

    fn decode_with_tags(&self, path: &Path, text: &str) -> StoreResult<Note> {
        let mut note = decode(text).map_err(|source| StoreError::Record {
            path: path.to_path_buf(),
            source,
        })?;
        let tags = self.tags.entries_containing(note.id())?;
        note.set_tags(tags);
        Ok(note)
    }
}
