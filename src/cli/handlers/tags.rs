//! Tags command handler.

use anyhow::{Context, Result};

use crate::cli::TagsArgs;
use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::store::NoteStore;

pub fn handle_tags(args: &TagsArgs, store: &NoteStore) -> Result<()> {
    let tags = store.tags().with_context(|| "failed to list tags")?;

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                for (tag, count) in &tags {
                    if args.counts {
                        println!("{} ({})", tag, count);
                    } else {
                        println!("{}", tag);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|(tag, count)| TagListing {
                    name: tag.to_string(),
                    count: args.counts.then_some(*count),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}
