use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use shelf_core::{SearchField, VERSION};

/// Shelf - catalogue your books, track what you've read
#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the library file
    #[arg(short, long, global = true, env = "SHELF_PATH")]
    pub library: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Human output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Flags shared by every command that prints books or stats.
#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT", conflicts_with = "json")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the library file should live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Book author
    #[arg(value_name = "AUTHOR")]
    pub author: String,

    /// Publication year
    #[arg(short, long)]
    pub year: i32,

    /// Genre (any text; see `shelf genres` for the usual ones)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Mark the book as already read
    #[arg(long)]
    pub read: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Position of the book as shown by `shelf list`
    #[arg(value_name = "N")]
    pub position: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `toggle` command
#[derive(Args)]
pub struct ToggleArgs {
    /// Position of the book as shown by `shelf list`
    #[arg(value_name = "N")]
    pub position: usize,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive; empty matches everything)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Field to search (title, author, genre)
    #[arg(short, long, value_name = "FIELD")]
    pub by: Option<SearchField>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub output: OutputArgs,
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
    /// Create a config file and an empty library
    Init(InitArgs),

    /// Add a book to the library
    Add(AddArgs),

    /// List every book in the library
    List(ListArgs),

    /// Remove a book by position
    Remove(RemoveArgs),

    /// Flip a book between read and unread
    Toggle(ToggleArgs),

    /// Search books by title, author or genre
    Search(SearchArgs),

    /// Show library statistics
    Stats(StatsArgs),

    /// List the suggested genres
    Genres,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
