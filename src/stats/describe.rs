use serde::Serialize;

use crate::stats::{StatsError, ensure_min_len};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    ensure_min_len(values, 1)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(values: &[f64]) -> Result<f64, StatsError> {
    ensure_min_len(values, 2)?;
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok((ss / (values.len() - 1) as f64).sqrt())
}

pub fn sample_variance(values: &[f64]) -> Result<f64, StatsError> {
    let sd = sample_std(values)?;
    Ok(sd * sd)
}

/// Linear interpolation between order statistics, `p` in [0, 1].
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

pub fn quartiles(values: &[f64]) -> Result<Quartiles, StatsError> {
    ensure_min_len(values, 1)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Ok(Quartiles {
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/describe.rs"]
mod tests;
