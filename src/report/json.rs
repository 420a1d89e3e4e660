use serde::Serialize;

use crate::pipeline::stage1_clean::SelectionAudit;
use crate::report::ReportError;
use crate::stats::roc::ScoreDirection;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub analyses: Vec<AnalysisSummary>,
    pub roc: Vec<RocScoreSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub path: String,
    pub rows_read: usize,
    pub blank_rows_skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub name: String,
    pub selections: Vec<SelectionAudit>,
    pub warnings: Vec<String>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RocScoreSummary {
    pub name: String,
    pub direction: ScoreDirection,
    pub auc: f64,
    /// `None` when the origin anchor was selected.
    pub cutoff: Option<f64>,
    pub accuracy: f64,
    pub sensitivity: f64,
    pub specificity: f64,
}

pub fn render_summary_json(summary: &RunSummary) -> Result<String, ReportError> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}
