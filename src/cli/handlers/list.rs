//! Handlers for commands that show a list of notes: read, ls, search.

use anyhow::{Context, Result};

use super::format_note_table;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{ListArgs, ReadArgs, SearchArgs};
use crate::domain::Note;
use crate::service::{ListQuery, NoteService};
use crate::store::NoteRepository;

pub fn handle_read<R: NoteRepository>(args: &ReadArgs, service: &NoteService<R>) -> Result<()> {
    let notes = service
        .read_notes(args.include_archived)
        .context("failed to read notes")?;
    print_notes(&notes, args.format)
}

pub fn handle_list<R: NoteRepository>(
    args: &ListArgs,
    service: &NoteService<R>,
    config: &Config,
) -> Result<()> {
    let query = ListQuery {
        limit: config.list_limit(args.limit),
        offset: args.offset,
        tag: args.tag.clone(),
        pinned_only: args.pinned,
        include_archived: args.include_archived,
    };

    let notes = service.list_notes(&query).context("failed to list notes")?;
    print_notes(&notes, args.format)
}

pub fn handle_search<R: NoteRepository>(
    args: &SearchArgs,
    service: &NoteService<R>,
) -> Result<()> {
    let notes = service
        .search_notes(&args.query, args.include_archived)
        .with_context(|| format!("failed to search for '{}'", args.query))?;
    print_notes(&notes, args.format)
}

fn print_notes(notes: &[Note], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", format_note_table(notes)),
        OutputFormat::Json => println!("{}", Output::new(notes).to_json()?),
    }
    Ok(())
}
