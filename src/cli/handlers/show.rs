//! Show command handler.

use anyhow::{Context, Result, bail};

use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::query::NoteQueries;
use crate::store::NoteStore;

pub fn handle_show(args: &ShowArgs, store: &NoteStore) -> Result<()> {
    let queries = NoteQueries::new(store);
    let Some(note) = queries
        .note(&args.id)
        .with_context(|| format!("failed to read note '{}'", args.id))?
    else {
        bail!("note not found: '{}'", args.id);
    };

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();
            println!(
                "ID: {}  Author: {}  Created: {}",
                note.id(),
                note.author_id(),
                note.created().format("%Y-%m-%d %H:%M:%S")
            );

            if !note.tags().is_empty() {
                let tags: Vec<_> = note.tags().iter().map(|t| t.as_str()).collect();
                println!("Tags: {}", tags.join(", "));
            }

            println!();
            if !note.content().is_empty() {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&note))?);
        }
    }

    Ok(())
}
