//! Search command implementation

use crate::cli::args::{OutputFormat, SearchArgs};
use crate::cli::logging::{log, LogLevel};
use crate::io::{load_ground_truth, load_predictions, records_to_csv, records_to_json};
use crate::search::{combination_count, EnsembleSearch, SearchConfig};

pub fn run_search(args: SearchArgs, level: LogLevel) -> Result<(), String> {
    let truth =
        load_ground_truth(&args.truth).map_err(|e| format!("Ground truth error: {e}"))?;
    let store = load_predictions(&args.predictions, &truth)
        .map_err(|e| format!("Prediction pool error: {e}"))?;

    let (samples, labels) = truth.shape();
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Pool: {} models, {samples} samples, {labels} labels",
            store.len()
        ),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Candidates: C({}, {}) = {}",
            store.len(),
            args.arity,
            combination_count(store.len(), args.arity as usize)
        ),
    );

    let config = SearchConfig {
        arity: args.arity as usize,
        limit: args.limit,
        parallel: args.parallel,
    };
    let outcome = EnsembleSearch::new(config)
        .run(&store, &truth)
        .map_err(|e| format!("Search error: {e}"))?;

    for record in outcome.leaderboard.records() {
        log(level, LogLevel::Verbose, "========================================");
        log(level, LogLevel::Verbose, &record.label);
        log(level, LogLevel::Verbose, "========================================");
        log(
            level,
            LogLevel::Verbose,
            &format!("Ensemble: {}", record.ensemble_name()),
        );
        log(level, LogLevel::Verbose, &format!("AUC: {}", record.auc));
        log(
            level,
            LogLevel::Verbose,
            &format!("best threshold: {}", record.threshold),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("accuracy: {}", record.accuracy),
        );
        log(
            level,
            LogLevel::Verbose,
            &format!("accuracy (dummy): {}", record.accuracy_dummy),
        );
        log(level, LogLevel::Verbose, &format!("f1-score: {}", record.f1));
        log(
            level,
            LogLevel::Verbose,
            &format!("f1-score (dummy): {}", record.f1_dummy),
        );
    }

    if !outcome.skips.is_empty() {
        log(
            level,
            LogLevel::Normal,
            &format!("Skipped: {} combination/label pairs", outcome.skips.len()),
        );
        for skip in &outcome.skips {
            let scope = match &skip.label {
                Some(label) => format!("{} [{label}]", skip.members.join("+")),
                None => skip.members.join("+"),
            };
            log(
                level,
                LogLevel::Verbose,
                &format!("  skip {scope}: {}", skip.error),
            );
        }
    }

    let mut leaderboard = outcome.leaderboard;
    leaderboard.rank();
    if let Some(top) = args.top {
        leaderboard.retain_top(top);
    }

    let rendered = match args.format {
        OutputFormat::Table => leaderboard.to_string(),
        OutputFormat::Json => records_to_json(leaderboard.records())
            .map_err(|e| format!("JSON serialization error: {e}"))?,
        OutputFormat::Csv => records_to_csv(leaderboard.records())
            .map_err(|e| format!("CSV serialization error: {e}"))?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| format!("Cannot write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Results written to {}", path.display()),
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
