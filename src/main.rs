//! Ensamblar CLI
//!
//! Ensemble search entry point for the ensamblar library.
//!
//! # Usage
//!
//! ```bash
//! # Search all 3-model ensembles
//! ensamblar search predictions/ valid.csv
//!
//! # Larger ensembles, capped sweep, CSV export
//! ensamblar search predictions/ valid.csv --arity 5 --limit 500 --format csv --output results.csv
//!
//! # Summarize the pool
//! ensamblar info predictions/ valid.csv
//!
//! # Check pool consistency
//! ensamblar validate predictions/ valid.csv
//! ```

use clap::Parser;
use ensamblar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
