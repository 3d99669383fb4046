//! Info command implementation

use crate::cli::args::InfoArgs;
use crate::cli::logging::{log, LogLevel};
use crate::io::{load_ground_truth, load_predictions};
use crate::search::combination_count;

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let truth =
        load_ground_truth(&args.truth).map_err(|e| format!("Ground truth error: {e}"))?;
    let store = load_predictions(&args.predictions, &truth)
        .map_err(|e| format!("Prediction pool error: {e}"))?;

    let (samples, labels) = truth.shape();
    log(level, LogLevel::Normal, "Prediction pool:");
    log(level, LogLevel::Normal, &format!("  Models: {}", store.len()));
    log(level, LogLevel::Normal, &format!("  Samples: {samples}"));
    log(
        level,
        LogLevel::Normal,
        &format!("  Labels: {labels} ({})", truth.labels().join(", ")),
    );

    for model in store.models() {
        let (rows, cols) = model.shape();
        log(
            level,
            LogLevel::Verbose,
            &format!("  {} ({rows} x {cols})", model.id()),
        );
    }

    log(level, LogLevel::Normal, "Candidates per arity:");
    for arity in 3..=6usize {
        if arity <= store.len() {
            log(
                level,
                LogLevel::Normal,
                &format!(
                    "  k={arity}: {} combinations",
                    combination_count(store.len(), arity)
                ),
            );
        }
    }

    Ok(())
}
