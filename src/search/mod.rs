//! Ensemble search: enumeration, aggregation, and the sweep
//!
//! - `combinations`: deterministic lexicographic subset enumeration
//! - `aggregate`: element-wise mean of member score matrices
//! - `config`: sweep configuration
//! - `sweep`: the orchestrator tying store, calibration, and evaluation
//!   together into a ranked outcome

pub mod aggregate;
pub mod combinations;
pub mod config;
pub mod sweep;

pub use aggregate::mean_scores;
pub use combinations::{combination_count, Combinations};
pub use config::SearchConfig;
pub use sweep::{EnsembleSearch, SearchOutcome, Skip};
