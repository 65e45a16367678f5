//! Listing command handlers (ls, tag, author).

use anyhow::{Context, Result};

use super::print_notes;
use crate::cli::{AuthorArgs, ListArgs, TagArgs};
use crate::domain::AuthorId;
use crate::query::NoteQueries;
use crate::store::NoteStore;

pub fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    let mut notes = store.list_all().with_context(|| "failed to list notes")?;

    // Most recent first
    notes.sort_by_key(|n| std::cmp::Reverse(n.created()));

    print_notes(&notes, args.format)
}

pub fn handle_tag(args: &TagArgs, store: &NoteStore) -> Result<()> {
    let notes = NoteQueries::new(store)
        .notes_by_tag(&args.name)
        .with_context(|| format!("failed to list notes with tag '{}'", args.name))?;

    print_notes(&notes, args.format)
}

pub fn handle_author(args: &AuthorArgs, store: &NoteStore) -> Result<()> {
    let author = AuthorId::new(args.id);
    let notes = NoteQueries::new(store)
        .notes_by_author(author)
        .with_context(|| format!("failed to list notes by author {}", author))?;

    print_notes(&notes, args.format)
}
