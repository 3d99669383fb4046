//! CLI command implementations

mod info;
mod search;
mod validate;

use crate::cli::args::{Cli, Command};
use crate::cli::logging::LogLevel;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Search(args) => search::run_search(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
