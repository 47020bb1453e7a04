//! Handlers for the read-only views: latest, pinned, stats.

use anyhow::{Context, Result};

use crate::cli::output::{Output, OutputFormat};
use crate::cli::{LatestArgs, PinnedArgs, StatsArgs};
use crate::service::views::{render_latest, render_pinned};
use crate::service::{NoteService, NoteStats};
use crate::store::NoteRepository;

pub fn handle_latest<R: NoteRepository>(
    args: &LatestArgs,
    service: &NoteService<R>,
) -> Result<()> {
    let note = service.latest_note().context("failed to load notes")?;

    match args.format {
        OutputFormat::Human => println!("{}", render_latest(note.as_ref())),
        OutputFormat::Json => println!("{}", Output::new(&note).to_json()?),
    }

    Ok(())
}

pub fn handle_pinned<R: NoteRepository>(
    args: &PinnedArgs,
    service: &NoteService<R>,
) -> Result<()> {
    let notes = service.pinned_notes().context("failed to load notes")?;

    match args.format {
        OutputFormat::Human => {
            let refs: Vec<_> = notes.iter().collect();
            println!("{}", render_pinned(&refs));
        }
        OutputFormat::Json => println!("{}", Output::new(&notes).to_json()?),
    }

    Ok(())
}

pub fn handle_stats<R: NoteRepository>(args: &StatsArgs, service: &NoteService<R>) -> Result<()> {
    let stats = service.stats().context("failed to load notes")?;

    match args.format {
        OutputFormat::Human => println!("{}", format_stats(&stats)),
        OutputFormat::Json => println!("{}", Output::new(stats).to_json()?),
    }

    Ok(())
}

pub(crate) fn format_stats(stats: &NoteStats) -> String {
    format!(
        "Total:    {}\nActive:   {}\nArchived: {}\nPinned:   {}",
        stats.total, stats.active, stats.archived, stats.pinned
    )
}
