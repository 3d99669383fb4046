//! The flat result row produced per (combination, label)

use super::evaluate::LabelEvaluation;
use serde::Serialize;

/// One scored (ensemble, label) pair
///
/// Immutable once constructed; field order mirrors the exported tabular
/// layout. `members` keeps pool insertion order for stable display, while
/// ensemble identity is the member set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnsembleRecord {
    /// Member model ids in pool order
    pub members: Vec<String>,
    /// Label name this row scores
    pub label: String,
    /// Area under the ROC curve
    pub auc: f64,
    /// Calibrated decision threshold
    pub threshold: f64,
    /// Accuracy of the all-positive dummy predictor
    pub accuracy_dummy: f64,
    /// Accuracy at the threshold
    pub accuracy: f64,
    /// F1 of the all-positive dummy predictor
    pub f1_dummy: f64,
    /// F1 at the threshold
    pub f1: f64,
}

impl EnsembleRecord {
    /// Assemble a record from a per-label evaluation
    pub fn new(members: Vec<String>, label: impl Into<String>, eval: LabelEvaluation) -> Self {
        Self {
            members,
            label: label.into(),
            auc: eval.auc,
            threshold: eval.threshold,
            accuracy_dummy: eval.accuracy_dummy,
            accuracy: eval.accuracy,
            f1_dummy: eval.f1_dummy,
            f1: eval.f1,
        }
    }

    /// Members joined for single-field display, e.g. "densenet+resnet"
    pub fn ensemble_name(&self) -> String {
        self.members.join("+")
    }
}
