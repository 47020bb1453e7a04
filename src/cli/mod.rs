//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// sticky - a personal note log kept in a single JSON file
#[derive(Parser, Debug)]
#[command(name = "sticky", version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding notes.json (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    Add(AddArgs),

    /// Show all notes, newest first
    Read(ReadArgs),

    /// List notes with paging and filters
    #[command(name = "ls")]
    List(ListArgs),

    /// Find notes whose text or tags contain a query
    Search(SearchArgs),

    /// Edit a note's message, tags, or flags
    Update(UpdateArgs),

    /// Delete a note permanently
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// Delete all notes, or only archived ones
    Clear(ClearArgs),

    /// Show the most recent active note
    Latest(LatestArgs),

    /// Show pinned notes
    Pinned(PinnedArgs),

    /// Show note counts
    Stats(StatsArgs),

    /// Generate a prompt from the current notes
    Prompt(PromptArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Note text
    pub message: String,

    /// Comma-separated tags (e.g. "work,urgent")
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Pin the note
    #[arg(short, long)]
    pub pinned: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `read` command
#[derive(Parser, Debug)]
pub struct ReadArgs {
    /// Include archived notes
    #[arg(short = 'a', long)]
    pub include_archived: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Maximum number of notes to show (defaults to config, then 20)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Number of notes to skip
    #[arg(short, long, default_value_t = 0)]
    pub offset: usize,

    /// Only notes with this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Only pinned notes
    #[arg(long)]
    pub pinned: bool,

    /// Include archived notes
    #[arg(short = 'a', long)]
    pub include_archived: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for in messages and tags
    pub query: String,

    /// Include archived notes
    #[arg(short = 'a', long)]
    pub include_archived: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `update` command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Note ID
    pub id: String,

    /// New message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Replacement comma-separated tags ("" clears them)
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Pin the note
    #[arg(long, conflicts_with = "unpin")]
    pub pin: bool,

    /// Unpin the note
    #[arg(long)]
    pub unpin: bool,

    /// Archive the note
    #[arg(long, conflicts_with = "unarchive")]
    pub archive: bool,

    /// Unarchive the note
    #[arg(long)]
    pub unarchive: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `clear` command
#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Only delete archived notes
    #[arg(long)]
    pub archived_only: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `latest` command
#[derive(Parser, Debug)]
pub struct LatestArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `pinned` command
#[derive(Parser, Debug)]
pub struct PinnedArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `prompt` command
#[derive(Parser, Debug)]
pub struct PromptArgs {
    #[command(subcommand)]
    pub kind: PromptKind,
}

#[derive(Subcommand, Debug)]
pub enum PromptKind {
    /// Ask for a summary of active notes
    Summary,

    /// Ask for a prioritized roadmap, optionally for one tag
    Roadmap {
        /// Only notes with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

impl UpdateArgs {
    /// Desired pinned state, if a flag was given.
    pub fn pinned(&self) -> Option<bool> {
        flag_pair(self.pin, self.unpin)
    }

    /// Desired archived state, if a flag was given.
    pub fn archived(&self) -> Option<bool> {
        flag_pair(self.archive, self.unarchive)
    }
}

fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}
