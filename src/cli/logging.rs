//! Leveled stdout logging for CLI output

/// Log level for CLI output
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with per-candidate details
    Verbose,
}

impl LogLevel {
    /// Derive the level from the global CLI flags
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Whether a message requiring `required` should print at this level
    pub fn permits(self, required: LogLevel) -> bool {
        self != LogLevel::Quiet && self >= required
    }
}

/// Print a message when the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level.permits(required) {
        println!("{msg}");
    }
}
