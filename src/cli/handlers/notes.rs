//! Handlers for commands that change the store: add, update, rm, clear.

use anyhow::{Context, Result};

use super::format_note_line;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::{AddArgs, ClearArgs, DeleteArgs, UpdateArgs};
use crate::service::{NoteService, NoteUpdate};
use crate::store::NoteRepository;

pub fn handle_add<R: NoteRepository>(args: &AddArgs, service: &NoteService<R>) -> Result<()> {
    let note = service
        .add_note(&args.message, args.tags.as_deref(), args.pinned)
        .context("failed to add note")?;

    match args.format {
        OutputFormat::Human => println!("Created: {}", format_note_line(&note)),
        OutputFormat::Json => println!("{}", Output::new(&note).to_json()?),
    }

    Ok(())
}

pub fn handle_update<R: NoteRepository>(
    args: &UpdateArgs,
    service: &NoteService<R>,
) -> Result<()> {
    let changes = NoteUpdate {
        message: args.message.clone(),
        tags: args.tags.clone(),
        pinned: args.pinned(),
        archived: args.archived(),
    };

    let note = service
        .update_note(&args.id, changes)
        .with_context(|| format!("failed to update note {}", args.id))?;

    match args.format {
        OutputFormat::Human => println!("Updated: {}", format_note_line(&note)),
        OutputFormat::Json => println!("{}", Output::new(&note).to_json()?),
    }

    Ok(())
}

pub fn handle_delete<R: NoteRepository>(
    args: &DeleteArgs,
    service: &NoteService<R>,
) -> Result<()> {
    let note = service
        .delete_note(&args.id)
        .with_context(|| format!("failed to delete note {}", args.id))?;

    match args.format {
        OutputFormat::Human => println!("Note deleted: {note}"),
        OutputFormat::Json => println!("{}", Output::new(&note).to_json()?),
    }

    Ok(())
}

pub fn handle_clear<R: NoteRepository>(args: &ClearArgs, service: &NoteService<R>) -> Result<()> {
    let summary = service
        .clear_notes(args.archived_only)
        .context("failed to clear notes")?;

    match args.format {
        OutputFormat::Human => println!("{summary}"),
        OutputFormat::Json => println!("{}", Output::new(summary).to_json()?),
    }

    Ok(())
}
