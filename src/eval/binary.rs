//! Binary classification metrics at a fixed threshold
//!
//! Accuracy and F1 over {0,1} predictions, plus the always-positive dummy
//! baselines used to sanity-check ensembles against a constant predictor.
//! F1 follows the sklearn zero-division convention: 0.0 when the
//! denominator vanishes.

/// Threshold scores into binary predictions: score >= threshold -> 1
pub fn binarize(scores: &[f64], threshold: f64) -> Vec<u8> {
    scores
        .iter()
        .map(|&s| u8::from(s >= threshold))
        .collect()
}

/// Fraction of predictions equal to the truth
pub fn accuracy(predictions: &[u8], truth: &[u8]) -> f64 {
    assert_eq!(
        predictions.len(),
        truth.len(),
        "predictions and truth must have same length"
    );
    if truth.is_empty() {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(truth.iter())
        .filter(|(p, t)| p == t)
        .count();
    correct as f64 / truth.len() as f64
}

/// F1 score of the positive class: 2TP / (2TP + FP + FN)
pub fn f1_score(predictions: &[u8], truth: &[u8]) -> f64 {
    assert_eq!(
        predictions.len(),
        truth.len(),
        "predictions and truth must have same length"
    );
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (&p, &t) in predictions.iter().zip(truth.iter()) {
        match (p != 0, t != 0) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, true) => fn_ += 1,
            (false, false) => {}
        }
    }
    let denom = 2 * tp + fp + fn_;
    if denom == 0 {
        return 0.0;
    }
    2.0 * tp as f64 / denom as f64
}

/// Accuracy of the trivial all-positive predictor
pub fn dummy_accuracy(truth: &[u8]) -> f64 {
    if truth.is_empty() {
        return 0.0;
    }
    let positives = truth.iter().filter(|&&t| t != 0).count();
    positives as f64 / truth.len() as f64
}

/// F1 of the trivial all-positive predictor
pub fn dummy_f1(truth: &[u8]) -> f64 {
    let ones = vec![1u8; truth.len()];
    f1_score(&ones, truth)
}
