//! Per-label evaluation: calibrate a threshold, then score against it
//!
//! Glues the ROC, threshold, and binary-metric pieces into the one-label
//! contract the sweep consumes: AUC from the full curve, binary metrics at
//! the calibrated threshold, and the always-positive dummy baselines.

use super::binary::{accuracy, binarize, dummy_accuracy, dummy_f1, f1_score};
use super::roc::roc_curve;
use super::threshold::select_operating_point;
use crate::error::Result;

/// All metrics for one (combined scores, label) pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelEvaluation {
    /// Area under the full ROC curve
    pub auc: f64,
    /// Calibrated g-mean threshold
    pub threshold: f64,
    /// Accuracy at the threshold
    pub accuracy: f64,
    /// Accuracy of the all-positive dummy predictor
    pub accuracy_dummy: f64,
    /// F1 at the threshold
    pub f1: f64,
    /// F1 of the all-positive dummy predictor
    pub f1_dummy: f64,
}

/// Evaluate one label column of combined ensemble scores
///
/// Propagates [`crate::error::Error::UndefinedMetric`] for single-class
/// columns; callers treat that as a per-label skip.
pub fn evaluate_label(scores: &[f64], truth: &[u8]) -> Result<LabelEvaluation> {
    let curve = roc_curve(scores, truth)?;
    let auc = curve.auc();
    let operating = select_operating_point(&curve);

    let predictions = binarize(scores, operating.threshold);
    Ok(LabelEvaluation {
        auc,
        threshold: operating.threshold,
        accuracy: accuracy(&predictions, truth),
        accuracy_dummy: dummy_accuracy(truth),
        f1: f1_score(&predictions, truth),
        f1_dummy: dummy_f1(truth),
    })
}
