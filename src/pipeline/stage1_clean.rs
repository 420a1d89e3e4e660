use serde::Serialize;

use crate::input::{Dataset, InputError};
use crate::model::profile::AnalysisProfile;

/// Which rows survived cleaning for one analysis scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionAudit {
    pub scope: String,
    pub rows_total: usize,
    pub rows_kept: usize,
    /// Zero-based dataset row indices.
    pub dropped_rows: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct CleanRequest<'a> {
    pub scope: &'a str,
    pub columns: &'a [String],
    pub labelled: bool,
}

/// Rows with every requested column numeric, aligned by position.
#[derive(Debug, Clone)]
pub struct CleanSelection {
    labels: Vec<bool>,
    columns: Vec<(String, Vec<f64>)>,
    kept_rows: Vec<usize>,
    audit: SelectionAudit,
}

impl CleanSelection {
    pub fn len(&self) -> usize {
        self.kept_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept_rows.is_empty()
    }

    /// Empty unless the selection was requested with labels.
    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    pub fn audit(&self) -> &SelectionAudit {
        &self.audit
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Labels as 0.0 / 1.0 for correlation against a score.
    pub fn label_values(&self) -> Vec<f64> {
        self.labels
            .iter()
            .map(|&l| if l { 1.0 } else { 0.0 })
            .collect()
    }

    /// Splits a column into (positive, negative) groups.
    pub fn split_by_label(&self, name: &str) -> Option<(Vec<f64>, Vec<f64>)> {
        let values = self.column(name)?;
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for (&v, &label) in values.iter().zip(&self.labels) {
            if label {
                positive.push(v);
            } else {
                negative.push(v);
            }
        }
        Some((positive, negative))
    }

    /// Per-row mean over the named columns.
    pub fn row_means<S: AsRef<str>>(&self, names: &[S]) -> Option<Vec<f64>> {
        if names.is_empty() {
            return None;
        }
        let cols = names
            .iter()
            .map(|n| self.column(n.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        let k = cols.len() as f64;
        Some(
            (0..self.len())
                .map(|row| cols.iter().map(|c| c[row]).sum::<f64>() / k)
                .collect(),
        )
    }
}

/// Coerces the requested columns to numbers and drops every row with a
/// missing value in any of them. Dropped rows are logged and audited.
pub fn run_clean(
    dataset: &Dataset,
    profile: &AnalysisProfile,
    request: &CleanRequest<'_>,
) -> Result<CleanSelection, InputError> {
    let numeric = request
        .columns
        .iter()
        .map(|name| dataset.numeric_column(name))
        .collect::<Result<Vec<_>, _>>()?;

    let groups = if request.labelled {
        let column = dataset
            .column(profile.group_column)
            .ok_or_else(|| InputError::Schema {
                missing: vec![profile.group_column.to_string()],
            })?;
        Some(column)
    } else {
        None
    };

    let n_rows = dataset.n_rows();
    let mut kept_rows = Vec::with_capacity(n_rows);
    let mut dropped_rows = Vec::new();
    for row in 0..n_rows {
        if numeric.iter().all(|col| col[row].is_some()) {
            kept_rows.push(row);
        } else {
            dropped_rows.push(row);
        }
    }

    let columns = request
        .columns
        .iter()
        .zip(&numeric)
        .map(|(name, col)| {
            let values = kept_rows.iter().filter_map(|&row| col[row]).collect();
            (name.clone(), values)
        })
        .collect();

    let labels = match groups {
        Some(groups) => kept_rows
            .iter()
            .map(|&row| profile.is_expert(&groups[row].as_category()))
            .collect(),
        None => Vec::new(),
    };

    if !dropped_rows.is_empty() {
        tracing::warn!(
            "{}: dropped {} of {} rows with missing or non-numeric values",
            request.scope,
            dropped_rows.len(),
            n_rows
        );
    }

    if kept_rows.is_empty() {
        tracing::warn!("{}: no rows left after cleaning", request.scope);
    }

    let audit = SelectionAudit {
        scope: request.scope.to_string(),
        rows_total: n_rows,
        rows_kept: kept_rows.len(),
        dropped_rows,
    };

    Ok(CleanSelection {
        labels,
        columns,
        kept_rows,
        audit,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_clean.rs"]
mod tests;
