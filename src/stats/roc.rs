//! ROC curve construction and Youden's-J cutoff selection.
//!
//! The curve starts at an origin anchor (nothing classified positive) and then
//! has one point per distinct score, in descending threshold order, so FPR and
//! TPR are both non-decreasing along it. Thresholds on the curve are reported
//! in raw score units for either direction.

use serde::Serialize;

use crate::stats::{StatsError, ensure_finite, ensure_same_len};

/// Which side of the threshold counts as the positive class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDirection {
    /// Positive when `score >= threshold`.
    HigherIsPositive,
    /// Positive when `score <= threshold`; the score is negated before the sweep.
    LowerIsPositive,
}

impl ScoreDirection {
    pub fn is_inverse(self) -> bool {
        self == ScoreDirection::LowerIsPositive
    }

    pub fn predicts_positive(self, score: f64, threshold: f64) -> bool {
        match self {
            ScoreDirection::HigherIsPositive => score >= threshold,
            ScoreDirection::LowerIsPositive => score <= threshold,
        }
    }

    fn effective(self, score: f64) -> f64 {
        match self {
            ScoreDirection::HigherIsPositive => score,
            ScoreDirection::LowerIsPositive => -score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
    /// Positives at or beyond `threshold`.
    #[serde(skip)]
    pub tp: usize,
    /// Negatives at or beyond `threshold`.
    #[serde(skip)]
    pub fp: usize,
}

impl RocPoint {
    /// Reporting value only; [`youden_index`] compares J on the counts.
    pub fn youden_j(&self) -> f64 {
        self.tpr - self.fpr
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confusion {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_: usize,
}

impl Confusion {
    pub fn at_threshold(
        labels: &[bool],
        scores: &[f64],
        threshold: f64,
        direction: ScoreDirection,
    ) -> Self {
        let mut c = Confusion::default();
        for (&label, &score) in labels.iter().zip(scores) {
            match (label, direction.predicts_positive(score, threshold)) {
                (true, true) => c.tp += 1,
                (false, true) => c.fp += 1,
                (false, false) => c.tn += 1,
                (true, false) => c.fn_ += 1,
            }
        }
        c
    }

    pub fn tpr(&self) -> f64 {
        rate(self.tp, self.tp + self.fn_)
    }

    pub fn specificity(&self) -> f64 {
        rate(self.tn, self.fp + self.tn)
    }

    pub fn accuracy(&self) -> f64 {
        rate(self.tp + self.tn, self.tp + self.fp + self.tn + self.fn_)
    }
}

fn rate(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutoffResult {
    pub direction: ScoreDirection,
    pub curve: Vec<RocPoint>,
    pub optimal_index: usize,
    pub threshold: f64,
    pub auc: f64,
    pub accuracy: f64,
    pub sensitivity: f64,
    pub specificity: f64,
}

impl CutoffResult {
    pub fn optimal_point(&self) -> &RocPoint {
        &self.curve[self.optimal_index]
    }
}

/// Builds the ROC curve for `scores` against `labels` and picks the
/// Youden-optimal operating point.
///
/// Ties in J resolve to the first maximum in descending-threshold order.
/// When no point beats the origin anchor, the anchor itself (threshold
/// `+inf`, or `-inf` for [`ScoreDirection::LowerIsPositive`]) is selected.
pub fn analyze_cutoff(
    labels: &[bool],
    scores: &[f64],
    direction: ScoreDirection,
) -> Result<CutoffResult, StatsError> {
    let curve = roc_curve(labels, scores, direction)?;
    let auc = trapezoid_area(&curve);
    let optimal_index = youden_index(&curve);
    let threshold = curve[optimal_index].threshold;

    let confusion = Confusion::at_threshold(labels, scores, threshold, direction);

    Ok(CutoffResult {
        direction,
        optimal_index,
        threshold,
        auc,
        accuracy: confusion.accuracy(),
        sensitivity: confusion.tpr(),
        specificity: confusion.specificity(),
        curve,
    })
}

pub fn roc_curve(
    labels: &[bool],
    scores: &[f64],
    direction: ScoreDirection,
) -> Result<Vec<RocPoint>, StatsError> {
    ensure_same_len(labels.len(), scores.len())?;
    if scores.is_empty() {
        return Err(StatsError::InsufficientData { needed: 1, got: 0 });
    }
    ensure_finite(scores)?;

    let positives = labels.iter().filter(|&&l| l).count();
    let negatives = labels.len() - positives;
    if positives == 0 || negatives == 0 {
        return Err(StatsError::InsufficientClassVariation {
            positives,
            negatives,
        });
    }

    let effective: Vec<f64> = scores.iter().map(|&s| direction.effective(s)).collect();
    let mut order: Vec<usize> = (0..effective.len()).collect();
    order.sort_by(|&a, &b| effective[b].total_cmp(&effective[a]));

    let anchor = match direction {
        ScoreDirection::HigherIsPositive => f64::INFINITY,
        ScoreDirection::LowerIsPositive => f64::NEG_INFINITY,
    };
    let mut curve = Vec::with_capacity(order.len() + 1);
    curve.push(RocPoint {
        threshold: anchor,
        fpr: 0.0,
        tpr: 0.0,
        tp: 0,
        fp: 0,
    });

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut i = 0usize;
    while i < order.len() {
        let tau = effective[order[i]];
        while i < order.len() && effective[order[i]] == tau {
            if labels[order[i]] {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        curve.push(RocPoint {
            threshold: direction.effective(tau),
            fpr: rate(fp, negatives),
            tpr: rate(tp, positives),
            tp,
            fp,
        });
    }

    Ok(curve)
}

/// Trapezoidal area under a curve ordered by non-decreasing FPR.
pub fn trapezoid_area(curve: &[RocPoint]) -> f64 {
    curve
        .windows(2)
        .map(|w| (w[1].fpr - w[0].fpr) * (w[0].tpr + w[1].tpr) / 2.0)
        .sum()
}

/// Index of the first point with maximal Youden's J.
///
/// J is compared as `tp * negatives - fp * positives`, which orders points
/// the same way as `tpr - fpr` without rounding. Class totals come from the
/// last point of the sweep.
pub fn youden_index(curve: &[RocPoint]) -> usize {
    let Some(last) = curve.last() else {
        return 0;
    };
    let positives = last.tp as i128;
    let negatives = last.fp as i128;

    let mut best = 0usize;
    let mut best_j = i128::MIN;
    for (idx, point) in curve.iter().enumerate() {
        let j = point.tp as i128 * negatives - point.fp as i128 * positives;
        if j > best_j {
            best = idx;
            best_j = j;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/roc.rs"]
mod tests;
