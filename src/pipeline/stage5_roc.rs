use serde::Serialize;

use crate::input::{Dataset, InputError};
use crate::model::domains::Instrument;
use crate::model::profile::AnalysisProfile;
use crate::pipeline::stage1_clean::{CleanRequest, CleanSelection, SelectionAudit, run_clean};
use crate::stats::StatsError;
use crate::stats::roc::{CutoffResult, ScoreDirection, analyze_cutoff};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "columns", rename_all = "snake_case")]
pub enum ScoreSource {
    Column(String),
    RowMean(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDefinition {
    pub name: String,
    pub source: ScoreSource,
    pub direction: ScoreDirection,
}

/// Operative time (lower is better), then the combined, UWOMSA and OSATS
/// per-row means of the primary rater's domain scores.
pub fn builtin_scores(profile: &AnalysisProfile) -> Vec<ScoreDefinition> {
    let osats = profile.primary_columns(Instrument::Osats);
    let uwomsa = profile.primary_columns(Instrument::Uwomsa);
    let combined: Vec<String> = osats.iter().chain(&uwomsa).cloned().collect();
    vec![
        ScoreDefinition {
            name: "Operative Time".to_string(),
            source: ScoreSource::Column(profile.operative_time_column.to_string()),
            direction: ScoreDirection::LowerIsPositive,
        },
        ScoreDefinition {
            name: "Combined Score".to_string(),
            source: ScoreSource::RowMean(combined),
            direction: ScoreDirection::HigherIsPositive,
        },
        ScoreDefinition {
            name: "UWOMSA Mean".to_string(),
            source: ScoreSource::RowMean(uwomsa),
            direction: ScoreDirection::HigherIsPositive,
        },
        ScoreDefinition {
            name: "OSATS Mean".to_string(),
            source: ScoreSource::RowMean(osats),
            direction: ScoreDirection::HigherIsPositive,
        },
    ]
}

pub fn roc_columns(profile: &AnalysisProfile) -> Vec<String> {
    profile.scored_columns()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocEntry {
    pub name: String,
    pub result: CutoffResult,
}

#[derive(Debug, Clone)]
pub struct RocOutput {
    pub entries: Vec<RocEntry>,
    pub audit: SelectionAudit,
    pub warnings: Vec<String>,
}

fn score_vector(selection: &CleanSelection, source: &ScoreSource) -> Option<Vec<f64>> {
    match source {
        ScoreSource::Column(name) => selection.column(name).map(<[f64]>::to_vec),
        ScoreSource::RowMean(names) => selection.row_means(names),
    }
}

/// Cutoff analysis for every built-in score definition. A definition that
/// cannot be evaluated is skipped with a warning.
pub fn run_roc(dataset: &Dataset, profile: &AnalysisProfile) -> Result<RocOutput, InputError> {
    let columns = roc_columns(profile);
    let selection = run_clean(
        dataset,
        profile,
        &CleanRequest {
            scope: "roc",
            columns: &columns,
            labelled: true,
        },
    )?;

    tracing::info!(
        "roc: {} rows, {} expert",
        selection.len(),
        selection.positives()
    );

    let mut entries = Vec::new();
    let mut warnings = Vec::new();
    for def in builtin_scores(profile) {
        let outcome = score_vector(&selection, &def.source)
            .ok_or(StatsError::InsufficientData { needed: 1, got: 0 })
            .and_then(|scores| analyze_cutoff(selection.labels(), &scores, def.direction));
        match outcome {
            Ok(result) => {
                tracing::info!(
                    "roc: {}: AUC={:.3} cutoff={:.3} accuracy={:.3}",
                    def.name,
                    result.auc,
                    result.threshold,
                    result.accuracy
                );
                entries.push(RocEntry {
                    name: def.name,
                    result,
                });
            }
            Err(err) => {
                let msg = format!("roc: {}: skipped: {err}", def.name);
                tracing::warn!("{msg}");
                warnings.push(msg);
            }
        }
    }

    Ok(RocOutput {
        entries,
        audit: selection.audit().clone(),
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_roc.rs"]
mod tests;
