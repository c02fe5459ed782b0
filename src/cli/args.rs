//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    categories::CategoriesArgs,
    completions::CompletionsArgs,
    drafts::DraftsArgs,
    init::InitArgs,
    list::ListArgs,
    new::NewArgs,
    show::ShowArgs,
    validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "fwt")]
#[command(author, version, about = "Formwright - form template toolkit")]
#[command(
    long_about = "A CLI for building form templates through category-driven wizards, stored as plain text YAML files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Workspace root (default: auto-detect by finding .formwright/)
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new formwright workspace
    Init(InitArgs),

    /// Create a template through the wizard
    New(NewArgs),

    /// Validate a category configuration
    Validate(ValidateArgs),

    /// List templates in the workspace
    List(ListArgs),

    /// Show a template's full schema
    Show(ShowArgs),

    /// List saved wizard drafts
    Drafts(DraftsArgs),

    /// List template categories and their configuration keys
    Categories(CategoriesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// Just IDs, one per line
    Id,
}
