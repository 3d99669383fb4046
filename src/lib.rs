//! Ensemble search and threshold calibration for multi-label classifier
//! pools.
//!
//! Given per-model prediction matrices and aligned binary ground truth,
//! this crate enumerates every fixed-size model combination, averages the
//! member scores, calibrates a per-label decision threshold on the ROC
//! curve (maximal g-mean), and ranks the candidates by held-out metrics:
//!
//! - `store`: prediction pool and ground-truth containers
//! - `search`: combination enumeration, aggregation, and the sweep
//! - `eval`: ROC/AUC, threshold selection, binary metrics, leaderboard
//! - `io`: CSV ingestion and CSV/JSON export
//! - `cli`: the `ensamblar` command-line surface
//!
//! # Example
//!
//! ```ignore
//! use ensamblar::{EnsembleSearch, GroundTruth, PredictionStore, SearchConfig};
//!
//! let mut store = PredictionStore::new();
//! store.insert("densenet", densenet_scores)?;
//! store.insert("resnet", resnet_scores)?;
//! store.insert("mobilenet", mobilenet_scores)?;
//!
//! let truth = GroundTruth::new(label_names, label_matrix)?;
//! let outcome = EnsembleSearch::new(SearchConfig::default()).run(&store, &truth)?;
//! for record in outcome.leaderboard.records() {
//!     println!("{}: AUC {:.4}", record.ensemble_name(), record.auc);
//! }
//! ```

pub mod cli;
pub mod error;
pub mod eval;
pub mod io;
pub mod search;
pub mod store;

pub use error::{Error, Result};
pub use eval::{
    evaluate_label, roc_curve, select_operating_point, EnsembleRecord, LabelEvaluation,
    Leaderboard, OperatingPoint, RocCurve, RocPoint,
};
pub use search::{
    combination_count, mean_scores, Combinations, EnsembleSearch, SearchConfig, SearchOutcome,
    Skip,
};
pub use store::{GroundTruth, ModelPrediction, PredictionStore};
