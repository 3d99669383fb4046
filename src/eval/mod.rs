//! Calibration and metric evaluation
//!
//! Per-label scoring of combined ensemble predictions:
//!
//! - `roc`: ROC curve construction and trapezoidal AUC
//! - `threshold`: g-mean operating-point selection with a pinned tie-break
//! - `binary`: thresholded accuracy/F1 and the all-positive dummy baselines
//! - `evaluate`: the one-label contract gluing the above together
//! - `record`: the flat (ensemble, label) result row
//! - `leaderboard`: append-only accumulation and deterministic ranking

pub mod binary;
pub mod evaluate;
pub mod leaderboard;
pub mod record;
pub mod roc;
pub mod threshold;

pub use evaluate::{evaluate_label, LabelEvaluation};
pub use leaderboard::Leaderboard;
pub use record::EnsembleRecord;
pub use roc::{roc_curve, RocCurve, RocPoint};
pub use threshold::{select_operating_point, OperatingPoint};
