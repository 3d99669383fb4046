//! Prediction pool and ground-truth containers
//!
//! A [`PredictionStore`] holds one score matrix per trained model, keyed by
//! model id and kept in insertion order so downstream enumeration is
//! deterministic. [`GroundTruth`] holds the aligned binary label matrix
//! together with the ordered label names.
//!
//! Both containers validate at construction: scores must lie in [0, 1],
//! ground-truth cells must be 0 or 1, and the label-name list must match
//! the matrix columns. Shape agreement between models is deliberately NOT
//! enforced here; the sweep checks it per combination so one misshapen
//! model skips its combinations instead of poisoning ingestion.

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView1};
use std::collections::HashMap;

/// One trained model's per-sample, per-label probability scores
#[derive(Clone, Debug)]
pub struct ModelPrediction {
    id: String,
    scores: Array2<f64>,
}

impl ModelPrediction {
    /// Model identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Score matrix, samples x labels
    pub fn scores(&self) -> &Array2<f64> {
        &self.scores
    }

    /// (samples, labels)
    pub fn shape(&self) -> (usize, usize) {
        self.scores.dim()
    }
}

/// Insertion-ordered pool of model prediction matrices
#[derive(Clone, Debug, Default)]
pub struct PredictionStore {
    models: Vec<ModelPrediction>,
    index: HashMap<String, usize>,
}

impl PredictionStore {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model's score matrix
    ///
    /// Rejects duplicate ids and any score outside [0, 1] (NaN included).
    pub fn insert(&mut self, id: impl Into<String>, scores: Array2<f64>) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateModel(id));
        }
        for ((row, col), &value) in scores.indexed_iter() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::ScoreOutOfRange {
                    model: id,
                    row,
                    col,
                    value,
                });
            }
        }
        self.index.insert(id.clone(), self.models.len());
        self.models.push(ModelPrediction { id, scores });
        Ok(())
    }

    /// Score matrix for a model id, if registered
    pub fn get(&self, id: &str) -> Option<&Array2<f64>> {
        self.index.get(id).map(|&i| &self.models[i].scores)
    }

    /// Model id at a pool position
    pub fn id_at(&self, position: usize) -> &str {
        &self.models[position].id
    }

    /// Registered models in insertion order
    pub fn models(&self) -> &[ModelPrediction] {
        &self.models
    }

    /// Model ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.id.as_str())
    }

    /// Number of registered models
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when no model is registered
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Binary ground-truth matrix with ordered label names
#[derive(Clone, Debug)]
pub struct GroundTruth {
    labels: Vec<String>,
    values: Array2<u8>,
}

impl GroundTruth {
    /// Build from label names and a {0,1} matrix
    pub fn new(labels: Vec<String>, values: Array2<u8>) -> Result<Self> {
        if labels.len() != values.ncols() {
            return Err(Error::LabelMismatch {
                expected: values.ncols(),
                actual: labels.len(),
            });
        }
        for ((row, col), &value) in values.indexed_iter() {
            if value > 1 {
                return Err(Error::TruthNotBinary { row, col, value });
            }
        }
        Ok(Self { labels, values })
    }

    /// Ordered label names
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Full binary matrix, samples x labels
    pub fn values(&self) -> &Array2<u8> {
        &self.values
    }

    /// One label column
    pub fn column(&self, label_idx: usize) -> ArrayView1<'_, u8> {
        self.values.column(label_idx)
    }

    /// (samples, labels)
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Number of samples
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    /// Number of labels
    pub fn n_labels(&self) -> usize {
        self.labels.len()
    }
}
