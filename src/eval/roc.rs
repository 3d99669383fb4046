//! ROC curve construction and AUC
//!
//! The curve is swept from the highest score downward, emitting one point
//! per distinct score value plus an origin point at threshold +inf, so
//! points run from (fpr 0, tpr 0) toward (1, 1) in ascending-FPR order.
//! AUC is the trapezoidal area under that curve and does not depend on
//! any chosen operating threshold.

use crate::error::{Error, Result};

/// A single point on the ROC curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RocPoint {
    /// Score threshold producing this point (+inf at the origin)
    pub threshold: f64,
    /// False positive rate: FP / (FP + TN)
    pub fpr: f64,
    /// True positive rate: TP / (TP + FN)
    pub tpr: f64,
}

/// ROC curve over all distinct score values
#[derive(Clone, Debug)]
pub struct RocCurve {
    points: Vec<RocPoint>,
}

impl RocCurve {
    /// Points in curve order: threshold descending, FPR ascending
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Area under the curve by the trapezoidal rule
    pub fn auc(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].fpr - w[0].fpr) * (w[0].tpr + w[1].tpr) / 2.0)
            .sum()
    }
}

/// Compute the ROC curve for one label column
///
/// `truth` cells are binary; any nonzero cell counts as positive. Fails
/// with [`Error::UndefinedMetric`] when the column is single-class, since
/// neither TPR nor FPR is defined there; callers skip that label rather
/// than receive a degenerate curve.
pub fn roc_curve(scores: &[f64], truth: &[u8]) -> Result<RocCurve> {
    if scores.is_empty() {
        return Err(Error::EmptyInput);
    }
    if scores.len() != truth.len() {
        return Err(Error::LengthMismatch {
            scores: scores.len(),
            truth: truth.len(),
        });
    }

    let total_pos = truth.iter().filter(|&&t| t != 0).count();
    let total_neg = truth.len() - total_pos;
    if total_pos == 0 {
        return Err(Error::UndefinedMetric { class: 0 });
    }
    if total_neg == 0 {
        return Err(Error::UndefinedMetric { class: 1 });
    }

    // Sweep order: descending score; ties grouped into one point.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let p = total_pos as f64;
    let n = total_neg as f64;

    let mut points = vec![RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    }];

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0;
    while i < order.len() {
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if truth[order[i]] != 0 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        points.push(RocPoint {
            threshold: current,
            fpr: fp as f64 / n,
            tpr: tp as f64 / p,
        });
    }

    Ok(RocCurve { points })
}
