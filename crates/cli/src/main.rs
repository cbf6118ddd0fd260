mod cmd;
mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(name = "kdb", version, about = "Art-collection catalog toolkit")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a dating expression into a from/to year pair
    Parse(ParseArgs),

    /// Search catalog records
    Search(SearchArgs),

    /// Recompute the derived year fields from each record's dating text
    Normalize(NormalizeArgs),

    /// Suggest field values for a prefix
    Suggest(SuggestArgs),

    /// Validate configuration and catalog, print resolved paths
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Dating expression, e.g. "ca. 1850" or "14.Jh."
    pub expression: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-text query (basic mode); cannot be combined with field filters
    pub query: Option<String>,

    /// Filter on title (expert mode)
    #[arg(long)]
    pub title: Option<String>,

    /// Filter on artist name (expert mode)
    #[arg(long)]
    pub artist: Option<String>,

    /// Filter on keyword (expert mode)
    #[arg(long)]
    pub keyword: Option<String>,

    /// Filter on current location (expert mode)
    #[arg(long)]
    pub location: Option<String>,

    /// Filter on place of production (expert mode)
    #[arg(long)]
    pub place_of_production: Option<String>,

    /// Match records dated at or after this year (expert mode)
    #[arg(long)]
    pub date_from: Option<i32>,

    /// Match records dated at or before this year (expert mode)
    #[arg(long)]
    pub date_to: Option<i32>,

    /// Skip this many results
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Return at most this many results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Catalog file to search instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(long)]
    pub json: bool,

    /// Shorthand for --output quiet (record ids only)
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Catalog file to normalize instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Write changes back to the catalog file (default is a dry run)
    #[arg(long)]
    pub write: bool,
}

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Value prefix to complete (empty lists everything up to the limit)
    #[arg(default_value = "")]
    pub prefix: String,

    /// Record field the suggestions are drawn from
    #[arg(long, value_enum)]
    pub source: SuggestSourceArg,

    /// Maximum number of suggestions
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Catalog file to read instead of the configured one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuggestSourceArg {
    Titles,
    Artists,
    Keywords,
    Locations,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Quiet,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => cmd::parse::run(&args),
        Commands::Search(args) => {
            cmd::search::run(cli.config.as_deref(), cli.profile.as_deref(), args);
        }
        Commands::Normalize(args) => {
            cmd::normalize::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Suggest(args) => {
            cmd::suggest::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Completions(args) => cmd::completions::run(&args),
    }
}
