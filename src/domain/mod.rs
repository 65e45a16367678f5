//! Core types: Note, NoteId (UUID), TagName, AuthorId

mod author_id;
mod note;
mod note_id;
mod tag;

pub use author_id::AuthorId;
pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
pub use tag::{MAX_TAG_BYTES, ParseTagError, TagName};
