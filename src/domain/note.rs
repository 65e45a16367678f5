//! Note struct representing a single persisted text note.

use crate::domain::{AuthorId, NoteId, TagName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A short text note.
///
/// When a note is handed to [`NoteStore::create`](crate::store::NoteStore::create),
/// `tags` lists the tag names to index it under (duplicates included). When a
/// note is read back, `tags` is derived from the Tag Index instead: one entry
/// per tag file that references the note, in file-name order.
///
/// No field is validated here. An empty title or a negative author id is
/// stored as given.
///
/// # Examples
///
/// ```
/// use notestore::domain::{AuthorId, Note, NoteId, TagName};
/// use chrono::Utc;
///
/// let note = Note::new(NoteId::new(), "Test Note", "Body", AuthorId::new(1), Utc::now())
///     .with_tags(vec![TagName::new("Work").unwrap()]);
/// assert_eq!(note.tags()[0].as_str(), "work");
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    author_id: AuthorId,
    created: DateTime<Utc>,
    #[serde(default)]
    tags: Vec<TagName>,
}

impl Note {
    /// Creates a note with no tags.
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author_id,
            created,
            tags: Vec::new(),
        }
    }

    /// Replaces the note's tag list.
    pub fn with_tags(mut self, tags: Vec<TagName>) -> Self {
        self.tags = tags;
        self
    }

    pub(crate) fn set_tags(&mut self, tags: Vec<TagName>) {
        self.tags = tags;
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the note's author.
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the note's tags.
    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("author_id", &self.author_id)
            .field("created", &self.created)
            .field("tags", &self.tags)
            .finish()
    }
}
