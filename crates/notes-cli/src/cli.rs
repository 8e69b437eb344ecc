use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use notes_core::VERSION;

/// Notes - personal notes with optional per-note password protection
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes store
    #[arg(short, long, global = true, env = "NOTES_PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Default editor written to the config
    #[arg(long)]
    pub editor: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `new` command
#[derive(Args)]
pub struct NewArgs {
    /// Note title
    #[arg(long)]
    pub title: Option<String>,

    /// Note body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Add tags to the note
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,

    /// Replace the note's tags
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Only pinned notes
    #[arg(long)]
    pub pinned: bool,

    /// Only encrypted notes
    #[arg(long, conflicts_with = "plain")]
    pub encrypted: bool,

    /// Only readable notes
    #[arg(long)]
    pub plain: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Table on a terminal, or tab-separated plain rows
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ListFormat>,
}

/// Rendering for `list` and `search`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Plain,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Search query (matches titles and readable content)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Table on a terminal, or tab-separated plain rows
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ListFormat>,
}

/// Arguments for commands that take a single note ID
#[derive(Args)]
pub struct IdArgs {
    /// Note ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `protect` and `unlock` commands
#[derive(Args)]
pub struct LockArgs {
    /// Note ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Disable interactive prompts (password from NOTES_PASSWORD)
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Summarize,
    Tags,
    Terms,
}

/// Arguments for the `summarize` command
#[derive(Args)]
pub struct SummarizeArgs {
    /// Note ID (full UUID or prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// What to generate; the default stores a fresh summary and tags
    #[arg(long, value_enum, default_value = "summarize")]
    pub mode: ModeArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Jsonl,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export a single note's HTML content
    #[arg(long, value_name = "ID")]
    pub html: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a notes store and config
    Init(InitArgs),

    /// Create a new note
    New(NewArgs),

    /// List notes (pinned first, then most recent)
    List(ListArgs),

    /// Search titles and readable content
    Search(SearchArgs),

    /// Show a note
    Show(ShowArgs),

    /// Edit a note's title, body or tags
    Edit(EditArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Pin or unpin a note
    Pin(IdArgs),

    /// Encrypt a note with a password
    Protect(LockArgs),

    /// Decrypt a protected note
    Unlock(LockArgs),

    /// Summarize a note or suggest tags and key terms
    Summarize(SummarizeArgs),

    /// Export notes (portable formats, you own your data)
    Export(ExportArgs),

    /// Check store integrity
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
