//! Builder for test notes with sensible defaults.

use chrono::{DateTime, Utc};
use notestore::domain::{AuthorId, Note, NoteId, TagName};

/// Builder for creating test notes with sensible defaults.
///
/// Automatically generates an ID and timestamp, with a fluent API
/// for setting optional fields.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    title: String,
    content: String,
    author: AuthorId,
    created: DateTime<Utc>,
    tags: Vec<TagName>,
}

impl TestNote {
    /// Creates a new test note with the given title, written by author 1.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: "This is a test note.".to_string(),
            author: AuthorId::new(1),
            created: Utc::now(),
            tags: Vec::new(),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Adds a tag to the note.
    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tags.push(TagName::new(tag.as_ref()).expect("Invalid tag"));
        self
    }

    /// Sets the author.
    pub fn author(mut self, author: i32) -> Self {
        self.author = AuthorId::new(author);
        self
    }

    /// Sets the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(
            self.id,
            &self.title,
            &self.content,
            self.author,
            self.created,
        )
        .with_tags(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("My Test Note").to_note();
        assert_eq!(note.title(), "My Test Note");
        assert_eq!(note.author_id(), AuthorId::new(1));
        assert!(note.tags().is_empty());
    }

    #[test]
    fn test_note_builder_sets_fields() {
        let note = TestNote::new("Builder")
            .id("a6d8fcf3-1256-4e9e-bc3d-7b41f2a01385")
            .author(9)
            .tag("Work")
            .content("body")
            .to_note();

        assert_eq!(note.id().to_string(), "a6d8fcf3-1256-4e9e-bc3d-7b41f2a01385");
        assert_eq!(note.author_id().value(), 9);
        assert_eq!(note.tags()[0].as_str(), "work");
        assert_eq!(note.content(), "body");
    }
}
