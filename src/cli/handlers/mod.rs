//! Command handlers for the CLI.

mod completions;
mod list;
mod new;
mod show;
mod tags;


use anyhow::Result;

use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::Note;

// Re-export public items
pub use completions::handle_completions;
pub use list::{handle_author, handle_list, handle_tag};
pub use new::{build_note, handle_new};
pub use show::handle_show;
pub use tags::handle_tags;

// ===========================================
// Shared Utilities
// ===========================================

const TITLE_WIDTH: usize = 40;

/// Prints a list of notes as a table or as JSON.
pub(crate) fn print_notes(notes: &[Note], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }

            println!(
                "{:<36}  {:<width$}  {:>6}  {:>10}",
                "ID",
                "Title",
                "Author",
                "Created",
                width = TITLE_WIDTH
            );
            println!(
                "{:<36}  {:<width$}  {:>6}  {:>10}",
                "-".repeat(36),
                "-".repeat(TITLE_WIDTH),
                "------",
                "----------",
                width = TITLE_WIDTH
            );
            for note in notes {
                println!(
                    "{:<36}  {:<width$}  {:>6}  {:>10}",
                    note.id().to_string(),
                    truncate_str(note.title(), TITLE_WIDTH),
                    note.author_id().value(),
                    note.created().format("%Y-%m-%d").to_string(),
                    width = TITLE_WIDTH
                );
            }

            println!();
            println!("{} note(s)", notes.len());
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
