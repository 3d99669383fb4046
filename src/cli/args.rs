//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ensamblar: ensemble search over classifier prediction pools
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ensamblar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Searches fixed-size model ensembles, calibrates per-label thresholds, and ranks the candidates"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the ensemble search sweep
    Search(SearchArgs),

    /// Summarize the prediction pool without searching
    Info(InfoArgs),

    /// Check pool and ground-truth consistency
    Validate(ValidateArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SearchArgs {
    /// Directory of per-model prediction CSVs
    #[arg(value_name = "PREDICTIONS_DIR")]
    pub predictions: PathBuf,

    /// Ground-truth CSV (header = label names, cells = 0/1)
    #[arg(value_name = "TRUTH_CSV")]
    pub truth: PathBuf,

    /// Number of models per ensemble
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=6))]
    pub arity: u8,

    /// Stop after the first N combinations
    #[arg(long)]
    pub limit: Option<usize>,

    /// Keep only the N best rows per label
    #[arg(long)]
    pub top: Option<usize>,

    /// Evaluate combinations across a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Write results to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Directory of per-model prediction CSVs
    #[arg(value_name = "PREDICTIONS_DIR")]
    pub predictions: PathBuf,

    /// Ground-truth CSV
    #[arg(value_name = "TRUTH_CSV")]
    pub truth: PathBuf,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Directory of per-model prediction CSVs
    #[arg(value_name = "PREDICTIONS_DIR")]
    pub predictions: PathBuf,

    /// Ground-truth CSV
    #[arg(value_name = "TRUTH_CSV")]
    pub truth: PathBuf,
}

/// Output format for the search command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: table, json, csv"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
