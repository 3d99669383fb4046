//! Validate command implementation
//!
//! Ingestion-only consistency pass: loads every prediction file
//! independently so all findings are reported in one run, not just the
//! first failure.

use crate::cli::args::ValidateArgs;
use crate::cli::logging::{log, LogLevel};
use crate::io::{load_ground_truth, load_prediction_matrix};
use crate::store::PredictionStore;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let truth =
        load_ground_truth(&args.truth).map_err(|e| format!("Ground truth error: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Ground truth: {} samples, labels: {}",
            truth.n_samples(),
            truth.labels().join(", ")
        ),
    );

    let mut paths: Vec<_> = std::fs::read_dir(&args.predictions)
        .map_err(|e| format!("Cannot read {}: {e}", args.predictions.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("csv"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(format!(
            "No prediction CSVs found in {}",
            args.predictions.display()
        ));
    }

    let mut store = PredictionStore::new();
    let mut failures = 0usize;
    for path in &paths {
        let id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let outcome = load_prediction_matrix(path, &truth).and_then(|scores| {
            let shape = scores.dim();
            store.insert(id.clone(), scores)?;
            Ok(shape)
        });
        match outcome {
            Ok((rows, cols)) => {
                let aligned = (rows, cols) == truth.shape();
                if aligned {
                    log(level, LogLevel::Normal, &format!("  OK   {id} ({rows} x {cols})"));
                } else {
                    failures += 1;
                    log(
                        level,
                        LogLevel::Normal,
                        &format!(
                            "  FAIL {id}: shape ({rows} x {cols}) does not match ground truth {:?}",
                            truth.shape()
                        ),
                    );
                }
            }
            Err(e) => {
                failures += 1;
                log(level, LogLevel::Normal, &format!("  FAIL {id}: {e}"));
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} of {} models failed validation", paths.len()));
    }
    log(
        level,
        LogLevel::Normal,
        &format!("All {} models consistent", paths.len()),
    );
    Ok(())
}
