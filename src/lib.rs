//! notestore - flat-file notes with tag and author indexes

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;
pub mod query;
pub mod store;

use anyhow::Result;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_author, handle_completions, handle_list, handle_new, handle_show, handle_tag,
        handle_tags,
    },
};
use store::NoteStore;

/// Main entry point for the CLI application.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let root = config.storage_root(cli.root.as_ref());
    log::debug!("using storage root {}", root.display());
    let store = NoteStore::open(root);

    match &cli.command {
        Command::New(args) => handle_new(args, &store),
        Command::Show(args) => handle_show(args, &store),
        Command::List(args) => handle_list(args, &store),
        Command::Tag(args) => handle_tag(args, &store),
        Command::Author(args) => handle_author(args, &store),
        Command::Tags(args) => handle_tags(args, &store),
        Command::Completions(args) => handle_completions(args),
    }
}
