use serde::Serialize;

use crate::input::{Dataset, InputError};
use crate::model::domains::{Instrument, domains_of};
use crate::model::profile::AnalysisProfile;
use crate::pipeline::stage1_clean::{CleanRequest, SelectionAudit, run_clean};
use crate::stats::StatsError;
use crate::stats::describe::{Quartiles, mean, quartiles, sample_std};
use crate::stats::hypothesis::{TestResult, mann_whitney_u, welch_t_test};

pub const OPERATIVE_TIME_LABEL: &str = "Operative Time (Minutes)";

/// Interval data is summarised parametrically, rubric scores as ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    MeanSd,
    MedianIqr,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupDescriptor {
    MeanSd { mean: f64, sd: Option<f64> },
    MedianIqr { quartiles: Quartiles },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub metric: String,
    pub column: String,
    pub kind: MetricKind,
    pub n_expert: usize,
    pub n_novice: usize,
    pub total: Option<GroupDescriptor>,
    pub expert: Option<GroupDescriptor>,
    pub novice: Option<GroupDescriptor>,
    pub test: Option<TestResult>,
}

#[derive(Debug, Clone)]
pub struct SummaryOutput {
    pub rows: Vec<SummaryRow>,
    pub audit: SelectionAudit,
    pub warnings: Vec<String>,
}

/// (label, column, kind) in report order: operative time, OSATS, UWOMSA.
pub fn summary_metrics(profile: &AnalysisProfile) -> Vec<(String, String, MetricKind)> {
    let mut metrics = vec![(
        OPERATIVE_TIME_LABEL.to_string(),
        profile.operative_time_column.to_string(),
        MetricKind::MeanSd,
    )];
    for instrument in [Instrument::Osats, Instrument::Uwomsa] {
        metrics.extend(domains_of(instrument).map(|d| {
            (
                d.summary_label.to_string(),
                profile.primary_column(d),
                MetricKind::MedianIqr,
            )
        }));
    }
    metrics
}

pub fn summary_columns(profile: &AnalysisProfile) -> Vec<String> {
    summary_metrics(profile)
        .into_iter()
        .map(|(_, column, _)| column)
        .collect()
}

/// Expert vs novice/intermediate comparison for every scored column.
pub fn run_summary(
    dataset: &Dataset,
    profile: &AnalysisProfile,
) -> Result<SummaryOutput, InputError> {
    let metrics = summary_metrics(profile);
    let columns: Vec<String> = metrics.iter().map(|(_, c, _)| c.clone()).collect();
    let selection = run_clean(
        dataset,
        profile,
        &CleanRequest {
            scope: "summary",
            columns: &columns,
            labelled: true,
        },
    )?;

    let mut rows = Vec::with_capacity(metrics.len());
    let mut warnings = Vec::new();
    for (metric, column, kind) in metrics {
        let total = selection.column(&column).unwrap_or_default();
        let (expert, novice) = selection.split_by_label(&column).unwrap_or_default();

        let mut note = |what: &str, err: StatsError| {
            let msg = format!("summary: {metric}: {what}: {err}");
            tracing::warn!("{msg}");
            warnings.push(msg);
        };

        let mut describe_group = |what: &str, values: &[f64]| match describe(kind, values) {
            Ok(d) => Some(d),
            Err(err) => {
                note(what, err);
                None
            }
        };
        let total_desc = describe_group("total", total);
        let expert_desc = describe_group("expert", &expert);
        let novice_desc = describe_group("novice", &novice);

        let test = match kind {
            MetricKind::MeanSd => welch_t_test(&expert, &novice),
            MetricKind::MedianIqr => {
                mann_whitney_u(&expert, &novice, profile.exact_mwu_max_group)
            }
        };
        let test = match test {
            Ok(t) => Some(t),
            Err(err) => {
                note("test", err);
                None
            }
        };

        rows.push(SummaryRow {
            metric,
            column,
            kind,
            n_expert: expert.len(),
            n_novice: novice.len(),
            total: total_desc,
            expert: expert_desc,
            novice: novice_desc,
            test,
        });
    }

    Ok(SummaryOutput {
        rows,
        audit: selection.audit().clone(),
        warnings,
    })
}

/// A single observation still has a mean; its SD is left undefined.
fn describe(kind: MetricKind, values: &[f64]) -> Result<GroupDescriptor, StatsError> {
    match kind {
        MetricKind::MeanSd => Ok(GroupDescriptor::MeanSd {
            mean: mean(values)?,
            sd: sample_std(values).ok(),
        }),
        MetricKind::MedianIqr => Ok(GroupDescriptor::MedianIqr {
            quartiles: quartiles(values)?,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_summary.rs"]
mod tests;
