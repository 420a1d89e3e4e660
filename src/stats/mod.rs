use thiserror::Error;

pub mod correlation;
pub mod describe;
pub mod hypothesis;
pub mod interpret;
pub mod kappa;
pub mod roc;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("insufficient data: need at least {needed} observations, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("insufficient class variation: {positives} positive and {negatives} negative labels")]
    InsufficientClassVariation { positives: usize, negatives: usize },
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("non-finite value at index {index}")]
    NonFiniteValue { index: usize },
    #[error("input is constant; statistic is undefined")]
    ConstantInput,
    #[error("expected agreement is 1; kappa is undefined")]
    DegenerateAgreement,
    #[error("distribution error: {0}")]
    Distribution(String),
}

pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<(), StatsError> {
    if left != right {
        return Err(StatsError::LengthMismatch { left, right });
    }
    Ok(())
}

pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), StatsError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(StatsError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

pub(crate) fn ensure_min_len(values: &[f64], needed: usize) -> Result<(), StatsError> {
    if values.len() < needed {
        return Err(StatsError::InsufficientData {
            needed,
            got: values.len(),
        });
    }
    Ok(())
}

/// Average (fractional) ranks, 1-based, ties share the mean rank.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut i = 0usize;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

/// Sizes of each group of tied values (groups of one included).
pub fn tie_groups(values: &[f64]) -> Vec<usize> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mut groups = Vec::new();
    let mut i = 0usize;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        groups.push(j - i);
        i = j;
    }
    groups
}
