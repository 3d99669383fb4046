//! Ensemble score aggregation
//!
//! The ensembling rule is the element-wise arithmetic mean of the member
//! score matrices. No rank aggregation, no learned stacking weights.

use crate::error::{Error, Result};
use crate::store::PredictionStore;
use ndarray::Array2;

/// Average the member matrices of one combination
///
/// Every member must be registered ([`Error::MissingPrediction`]) and must
/// match `expected_shape` ([`Error::ShapeMismatch`]), which the sweep sets
/// to the ground-truth shape so member-vs-member and member-vs-truth
/// disagreements surface identically.
pub fn mean_scores(
    store: &PredictionStore,
    members: &[String],
    expected_shape: (usize, usize),
) -> Result<Array2<f64>> {
    let mut combined = Array2::<f64>::zeros(expected_shape);
    for member in members {
        let scores = store
            .get(member)
            .ok_or_else(|| Error::MissingPrediction(member.clone()))?;
        if scores.dim() != expected_shape {
            return Err(Error::ShapeMismatch {
                model: member.clone(),
                expected: expected_shape,
                actual: scores.dim(),
            });
        }
        combined += scores;
    }
    combined /= members.len() as f64;
    Ok(combined)
}
