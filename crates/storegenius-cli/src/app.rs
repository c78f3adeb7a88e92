//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "storegenius")]
#[command(
    author,
    version,
    about = "Trend suggestions and prompt search over a product catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Config file (defaults to $STOREGENIUS_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand a trend into keywords and suggest products per keyword
    Suggest(SuggestArgs),

    /// Search the catalog with a shopping prompt
    Search(SearchArgs),

    /// Show the price constraint read from a piece of text
    Price(PriceArgs),

    /// Extract keywords from LLM output
    Keywords(KeywordsArgs),

    /// Show catalog and index status
    Status,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Trend phrase
    #[arg(required = true)]
    pub trend: Vec<String>,

    /// Results per keyword
    #[arg(short = 'n', long)]
    pub top_k: Option<usize>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Shopping prompt
    #[arg(required = true)]
    pub prompt: Vec<String>,

    /// Number of results
    #[arg(short = 'n', long)]
    pub top_k: Option<usize>,
}

#[derive(Args)]
pub struct PriceArgs {
    /// Text to inspect
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct KeywordsArgs {
    /// Read the response from a file instead of stdin
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
