use std::cmp::Ordering;

use serde::Serialize;

use crate::input::{Dataset, InputError};
use crate::model::domains::ordered_domains;
use crate::model::profile::AnalysisProfile;
use crate::pipeline::stage1_clean::{CleanRequest, SelectionAudit, run_clean};
use crate::report::round_to;
use crate::stats::StatsError;
use crate::stats::correlation::pearson;

const FEATURE_ORDER: &[&str] = &[
    "UWOMSA_A",
    "UWOMSA_B",
    "UWOMSA_C",
    "RfT",
    "TnM",
    "Instrument",
    "Flow",
    "Knowledge",
];

const UNIT_SUFFIX: &str = " (Mins)";

/// Below three points r is always +-1 and the p-value carries no information.
const MIN_CORRELATION_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRow {
    pub feature: String,
    pub column: String,
    pub n: usize,
    pub pearson_r: Option<f64>,
    pub p_value: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CorrelationOutput {
    pub rows: Vec<CorrelationRow>,
    pub audit: SelectionAudit,
    pub warnings: Vec<String>,
}

pub fn correlation_columns(profile: &AnalysisProfile) -> Vec<String> {
    let mut cols: Vec<String> = ordered_domains(FEATURE_ORDER)
        .into_iter()
        .map(|d| profile.primary_column(d))
        .collect();
    cols.push(profile.operative_time_column.to_string());
    cols
}

/// Pearson correlation of every scored column against the expert label,
/// sorted by r (three decimals), strongest positive first.
pub fn run_correlation(
    dataset: &Dataset,
    profile: &AnalysisProfile,
) -> Result<CorrelationOutput, InputError> {
    let columns = correlation_columns(profile);
    let selection = run_clean(
        dataset,
        profile,
        &CleanRequest {
            scope: "correlation",
            columns: &columns,
            labelled: true,
        },
    )?;
    let labels = selection.label_values();

    let mut rows = Vec::with_capacity(columns.len());
    let mut warnings = Vec::new();
    for column in &columns {
        let values = selection.column(column).unwrap_or_default();
        let feature = feature_name(column, profile);
        let outcome = if values.len() < MIN_CORRELATION_N {
            Err(StatsError::InsufficientData {
                needed: MIN_CORRELATION_N,
                got: values.len(),
            })
        } else {
            pearson(values, &labels)
        };
        let (pearson_r, p_value) = match outcome {
            Ok(res) => (Some(res.r), Some(res.p_value)),
            Err(err) => {
                let msg = format!("correlation: {feature}: {err}");
                tracing::warn!("{msg}");
                warnings.push(msg);
                (None, None)
            }
        };
        rows.push(CorrelationRow {
            feature,
            column: column.clone(),
            n: values.len(),
            pearson_r,
            p_value,
        });
    }

    rows.sort_by(|a, b| compare_r_desc(a.pearson_r, b.pearson_r));

    Ok(CorrelationOutput {
        rows,
        audit: selection.audit().clone(),
        warnings,
    })
}

fn compare_r_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => round_to(b, 3).total_cmp(&round_to(a, 3)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn feature_name(column: &str, profile: &AnalysisProfile) -> String {
    let rater_suffix = format!("_{}", profile.primary_rater.suffix());
    column.replace(&rater_suffix, "").replace(UNIT_SUFFIX, "")
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_correlation.rs"]
mod tests;
