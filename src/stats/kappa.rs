use crate::stats::{StatsError, ensure_finite, ensure_min_len, ensure_same_len};

/// Unweighted Cohen's kappa. Categories are the sorted union of values
/// observed in either rating vector.
pub fn cohen_kappa(a: &[f64], b: &[f64]) -> Result<f64, StatsError> {
    ensure_same_len(a.len(), b.len())?;
    ensure_min_len(a, 1)?;
    ensure_finite(a)?;
    ensure_finite(b)?;

    let mut categories: Vec<f64> = a.iter().chain(b).copied().collect();
    categories.sort_by(|x, y| x.total_cmp(y));
    categories.dedup_by(|x, y| x == y);

    let k = categories.len();
    let index_of = |v: f64| {
        categories
            .binary_search_by(|c| c.total_cmp(&v))
            .unwrap_or_else(|i| i.min(k - 1))
    };

    let mut confusion = vec![vec![0.0f64; k]; k];
    for (&x, &y) in a.iter().zip(b) {
        confusion[index_of(x)][index_of(y)] += 1.0;
    }

    let n = a.len() as f64;
    let row_totals: Vec<f64> = confusion.iter().map(|row| row.iter().sum()).collect();
    let col_totals: Vec<f64> = (0..k)
        .map(|j| confusion.iter().map(|row| row[j]).sum())
        .collect();

    let mut observed_disagreement = 0.0;
    let mut expected_disagreement = 0.0;
    for i in 0..k {
        for j in 0..k {
            if i == j {
                continue;
            }
            observed_disagreement += confusion[i][j];
            expected_disagreement += row_totals[i] * col_totals[j] / n;
        }
    }

    if expected_disagreement == 0.0 {
        return Err(StatsError::DegenerateAgreement);
    }
    Ok(1.0 - observed_disagreement / expected_disagreement)
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/kappa.rs"]
mod tests;
