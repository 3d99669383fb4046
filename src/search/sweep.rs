//! The ensemble search sweep
//!
//! Validates the pool once, then walks every candidate combination:
//! aggregate member scores, calibrate and evaluate each label, publish one
//! record per (combination, label). Failures scoped to a combination or a
//! label become [`Skip`] diagnostics instead of aborting the sweep; only
//! pool-level errors (`EmptyPool`, `InvalidArity`) are fatal.
//!
//! Combinations are independent of one another, so the parallel path maps
//! them across a rayon pool and reassembles results in combination order;
//! output is bit-identical to the sequential path.

use super::aggregate::mean_scores;
use super::combinations::Combinations;
use super::config::SearchConfig;
use crate::error::{Error, Result};
use crate::eval::{evaluate_label, EnsembleRecord, Leaderboard};
use crate::store::{GroundTruth, PredictionStore};
use rayon::prelude::*;

/// A contained per-combination or per-label failure
#[derive(Debug)]
pub struct Skip {
    /// Member ids of the affected combination
    pub members: Vec<String>,
    /// Affected label, or None when the whole combination was skipped
    pub label: Option<String>,
    /// What went wrong
    pub error: Error,
}

/// Result of a sweep: published rows plus contained failures
#[derive(Debug)]
pub struct SearchOutcome {
    /// All fully-constructed (combination, label) rows
    pub leaderboard: Leaderboard,
    /// Diagnostics for skipped combinations and labels
    pub skips: Vec<Skip>,
}

/// Orchestrates the combination sweep
pub struct EnsembleSearch {
    config: SearchConfig,
}

impl EnsembleSearch {
    /// Create a sweep with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the sweep over the pool against the ground truth
    ///
    /// Fails fast on pool-level problems before any aggregation happens.
    /// Rows are appended in combination order regardless of `parallel`.
    pub fn run(&self, store: &PredictionStore, truth: &GroundTruth) -> Result<SearchOutcome> {
        if store.is_empty() {
            return Err(Error::EmptyPool);
        }

        let mut combos: Vec<Vec<usize>> =
            Combinations::new(store.len(), self.config.arity)?.collect();
        if let Some(limit) = self.config.limit {
            combos.truncate(limit);
        }

        let per_combination: Vec<(Vec<EnsembleRecord>, Vec<Skip>)> = if self.config.parallel {
            combos
                .par_iter()
                .map(|indices| evaluate_combination(store, truth, indices))
                .collect()
        } else {
            combos
                .iter()
                .map(|indices| evaluate_combination(store, truth, indices))
                .collect()
        };

        let mut leaderboard = Leaderboard::new();
        let mut skips = Vec::new();
        for (records, combo_skips) in per_combination {
            leaderboard.extend(records);
            skips.extend(combo_skips);
        }

        Ok(SearchOutcome { leaderboard, skips })
    }
}

/// Aggregate and evaluate one combination; failures become skips
fn evaluate_combination(
    store: &PredictionStore,
    truth: &GroundTruth,
    indices: &[usize],
) -> (Vec<EnsembleRecord>, Vec<Skip>) {
    let members: Vec<String> = indices
        .iter()
        .map(|&i| store.id_at(i).to_string())
        .collect();

    let combined = match mean_scores(store, &members, truth.shape()) {
        Ok(combined) => combined,
        Err(error) => {
            return (
                Vec::new(),
                vec![Skip {
                    members,
                    label: None,
                    error,
                }],
            );
        }
    };

    let mut records = Vec::with_capacity(truth.n_labels());
    let mut skips = Vec::new();
    for (label_idx, label) in truth.labels().iter().enumerate() {
        let scores = combined.column(label_idx).to_vec();
        let column = truth.column(label_idx).to_vec();
        match evaluate_label(&scores, &column) {
            Ok(eval) => records.push(EnsembleRecord::new(members.clone(), label.clone(), eval)),
            Err(error) => skips.push(Skip {
                members: members.clone(),
                label: Some(label.clone()),
                error,
            }),
        }
    }
    (records, skips)
}
