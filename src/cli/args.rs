//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{check::CheckArgs, completions::CompletionsArgs, run::RunArgs};

#[derive(Parser)]
#[command(name = "partpromo")]
#[command(author, version, about = "Potential Part Promotion query over TPC-H style tables")]
#[command(long_about = "Finds suppliers in a nation holding excess stock of parts whose name matches a prefix, compared with what they shipped during a one-year window.")]
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

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate the query against a data directory
    Run(RunArgs),

    /// Load and validate a data directory, then show table sizes
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (tsv for results, table for check)
    #[default]
    Auto,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// Markdown tables
    Md,
}

impl OutputFormat {
    /// Replace `Auto` with a configured default, if it names a format
    pub fn or_configured(self, configured: Option<&str>) -> Self {
        match (self, configured) {
            (OutputFormat::Auto, Some(name)) => {
                OutputFormat::from_str(name, true).unwrap_or(OutputFormat::Auto)
            }
            (format, _) => format,
        }
    }
}
