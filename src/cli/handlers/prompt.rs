//! Prompt command handler.

use anyhow::{Context, Result};

use crate::cli::{PromptArgs, PromptKind};
use crate::service::NoteService;
use crate::store::NoteRepository;

pub fn handle_prompt<R: NoteRepository>(args: &PromptArgs, service: &NoteService<R>) -> Result<()> {
    let prompt = match &args.kind {
        PromptKind::Summary => service.summary_prompt(),
        PromptKind::Roadmap { tag } => service.roadmap_prompt(tag.as_deref()),
    }
    .context("failed to build prompt")?;

    println!("{prompt}");
    Ok(())
}
