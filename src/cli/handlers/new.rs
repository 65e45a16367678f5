//! New note command handler.

use anyhow::{Context, Result, bail};
use chrono::Utc;

use crate::cli::NewArgs;
use crate::domain::{AuthorId, Note, NoteId, TagName};
use crate::store::NoteStore;

/// Builds a note from command arguments (pure function, no I/O).
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty or whitespace-only
/// - The title or content contains a line break
/// - `--id` is not a UUID
/// - Any tag is blank
pub fn build_note(args: &NewArgs) -> Result<Note> {
    let title = args.title.trim();
    if title.is_empty() {
        bail!("title cannot be empty");
    }
    if has_line_break(title) {
        bail!("title cannot contain line breaks");
    }
    if has_line_break(&args.content) {
        bail!("content cannot contain line breaks");
    }

    let id = match &args.id {
        Some(s) => s
            .parse::<NoteId>()
            .with_context(|| format!("invalid --id '{}'", s))?,
        None => NoteId::new(),
    };

    let tags = args
        .tags
        .iter()
        .map(|t| TagName::new(t).with_context(|| format!("invalid tag '{}'", t)))
        .collect::<Result<Vec<_>>>()?;

    let note = Note::new(id, title, &args.content, AuthorId::new(args.author), Utc::now())
        .with_tags(tags);
    Ok(note)
}

/// Records hold one field per line.
fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

pub fn handle_new(args: &NewArgs, store: &NoteStore) -> Result<()> {
    let note = build_note(args)?;

    store
        .create(&note)
        .with_context(|| format!("failed to create note '{}'", note.title()))?;

    println!("Created: {}", note);
    println!("  {}", store.layout().note_path(note.id()).display());

    Ok(())
}
