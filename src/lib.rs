//! sticky - a personal note log kept in a single JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod service;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_clear, handle_completions, handle_delete, handle_latest, handle_list,
        handle_pinned, handle_prompt, handle_read, handle_search, handle_stats, handle_update,
    },
};
use service::NoteService;
use store::JsonNoteStore;

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    debug!(dir = %data_dir.display(), "using data directory");

    let store = JsonNoteStore::open(&data_dir).strict(config.strict);
    let service = NoteService::new(store);

    match &cli.command {
        Command::Add(args) => handle_add(args, &service),
        Command::Read(args) => handle_read(args, &service),
        Command::List(args) => handle_list(args, &service, &config),
        Command::Search(args) => handle_search(args, &service),
        Command::Update(args) => handle_update(args, &service),
        Command::Delete(args) => handle_delete(args, &service),
        Command::Clear(args) => handle_clear(args, &service),
        Command::Latest(args) => handle_latest(args, &service),
        Command::Pinned(args) => handle_pinned(args, &service),
        Command::Stats(args) => handle_stats(args, &service),
        Command::Prompt(args) => handle_prompt(args, &service),
        Command::Completions(args) => handle_completions(args),
    }
}
