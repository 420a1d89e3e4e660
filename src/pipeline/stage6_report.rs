use std::fs;
use std::path::{Path, PathBuf};

use crate::model::profile::AnalysisProfile;
use crate::pipeline::stage2_correlation::CorrelationOutput;
use crate::pipeline::stage3_reliability::ReliabilityOutput;
use crate::pipeline::stage4_summary::SummaryOutput;
use crate::pipeline::stage5_roc::RocOutput;
use crate::report::json::{
    AnalysisSummary, InputMeta, RocScoreSummary, RunSummary, ToolMeta, render_summary_json,
};
use crate::report::plot::render_roc_svg;
use crate::report::table::{
    Table, correlation_table, reliability_table, roc_curve_table, roc_cutoff_table,
    summary_table, write_csv,
};
use crate::report::text::render_table;
use crate::report::{ReportError, write_text};

pub const CORRELATION_CSV: &str = "correlation_results.csv";
pub const RELIABILITY_CSV: &str = "inter_rater_reliability.csv";
pub const SUMMARY_CSV: &str = "summary_statistics_comparison.csv";
pub const ROC_CUTOFFS_CSV: &str = "roc_cutoffs.csv";
pub const ROC_CURVES_CSV: &str = "roc_curves.csv";
pub const ROC_SVG: &str = "roc_curves.svg";
pub const SUMMARY_JSON: &str = "summary.json";

/// Results of whichever analyses were selected for this run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOutputs {
    pub correlation: Option<CorrelationOutput>,
    pub reliability: Option<ReliabilityOutput>,
    pub summary: Option<SummaryOutput>,
    pub roc: Option<RocOutput>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub plot: bool,
    pub console: bool,
}

#[derive(Debug, Clone)]
pub struct RunMeta {
    pub tool_name: String,
    pub tool_version: String,
    pub input: PathBuf,
    pub rows_read: usize,
    pub blank_rows_skipped: usize,
}

/// Writes every output file for the analyses present and returns their
/// paths in write order. `summary.json` is always written last.
pub fn write_reports(
    meta: &RunMeta,
    outputs: &AnalysisOutputs,
    profile: &AnalysisProfile,
    out_dir: &Path,
    options: ReportOptions,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::new();
    let mut analyses = Vec::new();

    if let Some(out) = &outputs.correlation {
        let path = emit(&correlation_table(out), out_dir, CORRELATION_CSV, options)?;
        analyses.push(AnalysisSummary {
            name: "correlation".to_string(),
            selections: vec![out.audit.clone()],
            warnings: out.warnings.clone(),
            outputs: vec![CORRELATION_CSV.to_string()],
        });
        written.push(path);
    }

    if let Some(out) = &outputs.reliability {
        let path = emit(
            &reliability_table(out, profile),
            out_dir,
            RELIABILITY_CSV,
            options,
        )?;
        analyses.push(AnalysisSummary {
            name: "reliability".to_string(),
            selections: out.audits.clone(),
            warnings: out.warnings.clone(),
            outputs: vec![RELIABILITY_CSV.to_string()],
        });
        written.push(path);
    }

    if let Some(out) = &outputs.summary {
        let path = emit(&summary_table(out), out_dir, SUMMARY_CSV, options)?;
        analyses.push(AnalysisSummary {
            name: "summary".to_string(),
            selections: vec![out.audit.clone()],
            warnings: out.warnings.clone(),
            outputs: vec![SUMMARY_CSV.to_string()],
        });
        written.push(path);
    }

    let mut roc_scores = Vec::new();
    if let Some(out) = &outputs.roc {
        let mut files = vec![ROC_CUTOFFS_CSV.to_string(), ROC_CURVES_CSV.to_string()];
        written.push(emit(&roc_cutoff_table(out), out_dir, ROC_CUTOFFS_CSV, options)?);

        let curves = out_dir.join(ROC_CURVES_CSV);
        write_csv(&roc_curve_table(out), &curves)?;
        written.push(curves);

        if options.plot && !out.entries.is_empty() {
            let svg = out_dir.join(ROC_SVG);
            render_roc_svg(&out.entries, &svg)?;
            tracing::info!("wrote {}", svg.display());
            files.push(ROC_SVG.to_string());
            written.push(svg);
        }

        roc_scores = out
            .entries
            .iter()
            .map(|e| RocScoreSummary {
                name: e.name.clone(),
                direction: e.result.direction,
                auc: e.result.auc,
                cutoff: e.result.threshold.is_finite().then_some(e.result.threshold),
                accuracy: e.result.accuracy,
                sensitivity: e.result.sensitivity,
                specificity: e.result.specificity,
            })
            .collect();
        analyses.push(AnalysisSummary {
            name: "roc".to_string(),
            selections: vec![out.audit.clone()],
            warnings: out.warnings.clone(),
            outputs: files,
        });
    }

    let summary = RunSummary {
        tool: ToolMeta {
            name: meta.tool_name.clone(),
            version: meta.tool_version.clone(),
        },
        input: InputMeta {
            path: meta.input.display().to_string(),
            rows_read: meta.rows_read,
            blank_rows_skipped: meta.blank_rows_skipped,
        },
        analyses,
        roc: roc_scores,
    };
    let json_path = out_dir.join(SUMMARY_JSON);
    write_text(&json_path, &render_summary_json(&summary)?)?;
    written.push(json_path);

    Ok(written)
}

/// Writes the CSV and, when enabled, prints the table to stdout.
fn emit(
    table: &Table,
    out_dir: &Path,
    file: &str,
    options: ReportOptions,
) -> Result<PathBuf, ReportError> {
    let path = out_dir.join(file);
    write_csv(table, &path)?;
    tracing::info!("wrote {}", path.display());
    if options.console {
        println!("{}", render_table(table));
    }
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
