use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::stats::correlation::two_sided_t_p;
use crate::stats::describe::{mean, sample_variance};
use crate::stats::{StatsError, average_ranks, ensure_finite, ensure_min_len, tie_groups};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TestMethod {
    WelchT,
    MannWhitneyExact,
    MannWhitneyAsymptotic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    pub method: TestMethod,
    pub statistic: f64,
    pub p_value: f64,
}

/// Two-sided Welch's unequal-variance t-test of `a` against `b`.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<TestResult, StatsError> {
    ensure_min_len(a, 2)?;
    ensure_min_len(b, 2)?;
    ensure_finite(a)?;
    ensure_finite(b)?;

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let se1 = sample_variance(a)? / n1;
    let se2 = sample_variance(b)? / n2;
    let se = se1 + se2;
    if se == 0.0 {
        return Err(StatsError::ConstantInput);
    }

    let t = (mean(a)? - mean(b)?) / se.sqrt();
    let df = se * se / (se1 * se1 / (n1 - 1.0) + se2 * se2 / (n2 - 1.0));
    Ok(TestResult {
        method: TestMethod::WelchT,
        statistic: t,
        p_value: two_sided_t_p(t, df)?,
    })
}

/// Two-sided Mann-Whitney U test. `statistic` is U for the first sample.
///
/// The exact null distribution is used when either sample has at most
/// `exact_max_group` observations and the pooled sample has no ties;
/// otherwise the normal approximation with tie and continuity correction.
pub fn mann_whitney_u(
    a: &[f64],
    b: &[f64],
    exact_max_group: usize,
) -> Result<TestResult, StatsError> {
    ensure_min_len(a, 1)?;
    ensure_min_len(b, 1)?;
    ensure_finite(a)?;
    ensure_finite(b)?;

    let n1 = a.len();
    let n2 = b.len();
    let pooled: Vec<f64> = a.iter().chain(b).copied().collect();
    let ranks = average_ranks(&pooled);
    let rank_sum: f64 = ranks[..n1].iter().sum();
    let u1 = rank_sum - (n1 * (n1 + 1)) as f64 / 2.0;
    let u2 = (n1 * n2) as f64 - u1;
    let u = u1.max(u2);

    let ties = tie_groups(&pooled);
    let has_ties = ties.iter().any(|&t| t > 1);
    let use_exact = (n1 <= exact_max_group || n2 <= exact_max_group) && !has_ties;

    let (method, p_value) = if use_exact {
        let sf = exact_u_sf(u.round() as usize, n1, n2);
        (TestMethod::MannWhitneyExact, (2.0 * sf).clamp(0.0, 1.0))
    } else {
        (
            TestMethod::MannWhitneyAsymptotic,
            asymptotic_u_p(u, n1, n2, &ties)?,
        )
    };

    Ok(TestResult {
        method,
        statistic: u1,
        p_value,
    })
}

fn asymptotic_u_p(u: f64, n1: usize, n2: usize, ties: &[usize]) -> Result<f64, StatsError> {
    let n = (n1 + n2) as f64;
    let prod = (n1 * n2) as f64;
    let tie_term: f64 = ties
        .iter()
        .map(|&t| {
            let t = t as f64;
            t * t * t - t
        })
        .sum();
    let variance = prod / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    if variance <= 0.0 {
        return Ok(1.0);
    }
    let z = (u - prod / 2.0 - 0.5) / variance.sqrt();
    let normal = Normal::new(0.0, 1.0).map_err(|e| StatsError::Distribution(e.to_string()))?;
    Ok((2.0 * normal.sf(z)).clamp(0.0, 1.0))
}

/// P(U >= u) under the null for sample sizes `n1`, `n2` without ties.
fn exact_u_sf(u: usize, n1: usize, n2: usize) -> f64 {
    let counts = exact_u_counts(n1, n2);
    let total: f64 = counts.iter().sum();
    let tail: f64 = counts.iter().skip(u).sum();
    tail / total
}

/// Number of orderings producing each U in `0..=n1*n2`.
///
/// These are the coefficients of the Gaussian binomial `[n1 + n2, m]_q` with
/// `m = min(n1, n2)`, built as `prod (1 - q^(n + i)) / (1 - q^i)` for
/// `i in 1..=m`. Truncating at degree `n1 * n2` is exact since the product is
/// a polynomial of that degree.
fn exact_u_counts(n1: usize, n2: usize) -> Vec<f64> {
    let (m, n) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
    let max_u = m * n;
    let mut counts = vec![0.0; max_u + 1];
    counts[0] = 1.0;

    for i in 1..=m {
        let shift = n + i;
        for k in (shift..=max_u).rev() {
            counts[k] -= counts[k - shift];
        }
        for k in i..=max_u {
            counts[k] += counts[k - i];
        }
    }
    counts
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/hypothesis.rs"]
mod tests;
