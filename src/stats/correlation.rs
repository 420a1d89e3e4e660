use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::stats::{StatsError, ensure_finite, ensure_min_len, ensure_same_len};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PearsonResult {
    pub r: f64,
    pub p_value: f64,
    pub n: usize,
}

/// Pearson product-moment correlation with a two-sided p-value from the
/// t distribution on `n - 2` degrees of freedom.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<PearsonResult, StatsError> {
    ensure_same_len(x.len(), y.len())?;
    ensure_min_len(x, 2)?;
    ensure_finite(x)?;
    ensure_finite(y)?;

    let n = x.len();
    let mx = x.iter().sum::<f64>() / n as f64;
    let my = y.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::ConstantInput);
    }

    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);

    // Two points always lie on a line.
    if n == 2 {
        return Ok(PearsonResult { r, p_value: 1.0, n });
    }
    if r.abs() == 1.0 {
        return Ok(PearsonResult { r, p_value: 0.0, n });
    }

    let df = (n - 2) as f64;
    let t = r * (df / (1.0 - r * r)).sqrt();
    let p_value = two_sided_t_p(t, df)?;
    Ok(PearsonResult { r, p_value, n })
}

pub(crate) fn two_sided_t_p(t: f64, df: f64) -> Result<f64, StatsError> {
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/correlation.rs"]
mod tests;
