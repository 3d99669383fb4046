//! Crate-wide error types
//!
//! Pool-level configuration errors (`InvalidArity`, `EmptyPool`,
//! `LabelMismatch`) abort a sweep. Everything scoped to a single
//! combination or label (`MissingPrediction`, `ShapeMismatch`,
//! `UndefinedMetric`) is contained by the sweep and reported as a
//! diagnostic instead of aborting.

use thiserror::Error;

/// Errors produced by the ensemble search pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Requested ensemble size outside [1, pool size]
    #[error("ensemble arity {arity} outside valid range [1, {pool_size}]")]
    InvalidArity { arity: usize, pool_size: usize },

    /// No prediction matrices registered
    #[error("prediction pool is empty")]
    EmptyPool,

    /// Label-name count disagrees with matrix columns
    #[error("{actual} label names for {expected} matrix columns")]
    LabelMismatch { expected: usize, actual: usize },

    /// Combination references a model the pool does not hold
    #[error("no prediction matrix registered for model '{0}'")]
    MissingPrediction(String),

    /// Member matrix shape disagrees with the ground truth
    #[error("shape mismatch for model '{model}': expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        model: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Model id registered twice
    #[error("model '{0}' already registered")]
    DuplicateModel(String),

    /// Prediction score outside [0, 1]
    #[error("score {value} for model '{model}' at [{row}, {col}] outside [0, 1]")]
    ScoreOutOfRange {
        model: String,
        row: usize,
        col: usize,
        value: f64,
    },

    /// Ground-truth cell that is neither 0 nor 1
    #[error("ground-truth value {value} at [{row}, {col}] is not binary")]
    TruthNotBinary { row: usize, col: usize, value: u8 },

    /// ROC/AUC undefined: the ground-truth column holds a single class
    #[error("metric undefined: ground-truth column is constant {class}")]
    UndefinedMetric { class: u8 },

    /// Metric input slices are empty
    #[error("metric input is empty")]
    EmptyInput,

    /// Score and truth vectors differ in length
    #[error("scores length {scores} != truth length {truth}")]
    LengthMismatch { scores: usize, truth: usize },

    /// Malformed cell in an input file
    #[error("invalid value '{value}' in {file} at line {line}")]
    Parse {
        file: String,
        line: usize,
        value: String,
    },

    /// Prediction file header disagrees with the ground-truth labels
    #[error("label header in '{file}' does not match ground truth")]
    HeaderMismatch { file: String },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ensemble search operations
pub type Result<T> = std::result::Result<T, Error>;
