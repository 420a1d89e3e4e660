use std::path::Path;

use crate::model::profile::AnalysisProfile;
use crate::pipeline::stage2_correlation::CorrelationOutput;
use crate::pipeline::stage3_reliability::ReliabilityOutput;
use crate::pipeline::stage4_summary::SummaryOutput;
use crate::pipeline::stage5_roc::RocOutput;
use crate::report::{MISSING, ReportError, format_descriptor, format_fixed, format_p_value};

/// A rendered result table: every cell already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }
}

pub fn write_csv(table: &Table, path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn correlation_table(out: &CorrelationOutput) -> Table {
    let mut table = Table::new(
        "Correlation with expertise",
        &["Feature", "Pearson r", "p-value"],
    );
    for row in &out.rows {
        table.push(vec![
            row.feature.clone(),
            format_fixed(row.pearson_r, 3),
            format_fixed(row.p_value, 3),
        ]);
    }
    table
}

pub fn reliability_table(out: &ReliabilityOutput, profile: &AnalysisProfile) -> Table {
    let mut table = Table::new(
        "Inter-rater reliability",
        &[
            "Domain",
            "Pearson r",
            "Pearson Interpretation",
            "P-value (r)",
            "Cohen's Kappa",
            "Kappa Interpretation",
        ],
    );
    for row in &out.rows {
        table.push(vec![
            row.domain.clone(),
            format_fixed(row.pearson.map(|p| p.r), 3),
            row.strength.map_or(MISSING, |s| s.label()).to_string(),
            format_p_value(row.pearson.map(|p| p.p_value), profile.p_value_floor),
            format_fixed(row.kappa, 3),
            row.agreement.map_or(MISSING, |a| a.label()).to_string(),
        ]);
    }
    table
}

pub fn summary_table(out: &SummaryOutput) -> Table {
    let mut table = Table::new(
        "Expert vs novice/intermediate",
        &["Metric", "Total", "Expert", "Novice/Intermediate", "P-value"],
    );
    for row in &out.rows {
        table.push(vec![
            row.metric.clone(),
            format_descriptor(row.total.as_ref()),
            format_descriptor(row.expert.as_ref()),
            format_descriptor(row.novice.as_ref()),
            format_fixed(row.test.map(|t| t.p_value), 3),
        ]);
    }
    table
}

pub fn roc_cutoff_table(out: &RocOutput) -> Table {
    let mut table = Table::new(
        "ROC cutoffs",
        &[
            "Score",
            "Direction",
            "AUC",
            "Cutoff",
            "Accuracy",
            "Sensitivity",
            "Specificity",
            "Optimal FPR",
            "Optimal TPR",
        ],
    );
    for entry in &out.entries {
        let res = &entry.result;
        let point = res.optimal_point();
        let direction = if res.direction.is_inverse() {
            "lower"
        } else {
            "higher"
        };
        table.push(vec![
            entry.name.clone(),
            direction.to_string(),
            format_fixed(Some(res.auc), 3),
            format_threshold(res.threshold, 3),
            format_fixed(Some(res.accuracy), 3),
            format_fixed(Some(res.sensitivity), 3),
            format_fixed(Some(res.specificity), 3),
            format_fixed(Some(point.fpr), 3),
            format_fixed(Some(point.tpr), 3),
        ]);
    }
    table
}

/// Long format, one line per curve point.
pub fn roc_curve_table(out: &RocOutput) -> Table {
    let mut table = Table::new("ROC curves", &["Score", "Point", "Threshold", "FPR", "TPR"]);
    for entry in &out.entries {
        for (idx, point) in entry.result.curve.iter().enumerate() {
            table.push(vec![
                entry.name.clone(),
                idx.to_string(),
                format_threshold(point.threshold, 6),
                format!("{:.6}", point.fpr),
                format!("{:.6}", point.tpr),
            ]);
        }
    }
    table
}

/// The origin anchor sits at an infinite threshold.
fn format_threshold(v: f64, decimals: usize) -> String {
    if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{:.*}", decimals, v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/table.rs"]
mod tests;
