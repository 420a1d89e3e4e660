mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use crate::input::{InputError, load_dataset};
use crate::model::profile::{AnalysisProfile, DEFAULT_INPUT};
use crate::pipeline::stage2_correlation::{correlation_columns, run_correlation};
use crate::pipeline::stage3_reliability::{reliability_columns, run_reliability};
use crate::pipeline::stage4_summary::{run_summary, summary_columns};
use crate::pipeline::stage5_roc::{roc_columns, run_roc};
use crate::pipeline::stage6_report::{AnalysisOutputs, ReportOptions, RunMeta, write_reports};
use crate::report::ReportError;

#[derive(Parser, Debug)]
#[command(
    name = "osats-analyze",
    version,
    about = "Correlation, inter-rater reliability, group comparison and ROC cutoffs for OSATS/UWOMSA scores"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load the dataset once and run the selected analyses.
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Spreadsheet (.xlsx/.xls/.ods) or delimited text (.csv/.tsv, optionally .gz).
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Worksheet name; the first sheet when omitted.
    #[arg(long)]
    sheet: Option<String>,
    #[arg(long, default_value = ".")]
    out: PathBuf,
    /// May be repeated. Defaults to all analyses.
    #[arg(long = "analysis", value_enum)]
    analyses: Vec<AnalysisKind>,
    /// Skip roc_curves.svg.
    #[arg(long)]
    no_plot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnalysisKind {
    All,
    Correlation,
    Reliability,
    Summary,
    Roc,
}

const RUN_ORDER: [AnalysisKind; 4] = [
    AnalysisKind::Correlation,
    AnalysisKind::Reliability,
    AnalysisKind::Summary,
    AnalysisKind::Roc,
];

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Run(args) => run(args, true),
    };
    if let Err(err) = result {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs, console: bool) -> Result<Vec<PathBuf>, RunError> {
    let profile = AnalysisProfile::default_v1();
    let selected = resolve_analyses(&args.analyses);

    let dataset = load_dataset(&args.input, args.sheet.as_deref())?;
    dataset.require_columns(&required_columns(&selected, &profile))?;

    let mut outputs = AnalysisOutputs::default();
    for kind in &selected {
        match kind {
            AnalysisKind::Correlation => {
                outputs.correlation = Some(run_correlation(&dataset, &profile)?)
            }
            AnalysisKind::Reliability => {
                outputs.reliability = Some(run_reliability(&dataset, &profile)?)
            }
            AnalysisKind::Summary => outputs.summary = Some(run_summary(&dataset, &profile)?),
            AnalysisKind::Roc => outputs.roc = Some(run_roc(&dataset, &profile)?),
            AnalysisKind::All => {}
        }
    }

    let meta = RunMeta {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        input: dataset.source().to_path_buf(),
        rows_read: dataset.n_rows(),
        blank_rows_skipped: dataset.blank_rows_skipped(),
    };
    let options = ReportOptions {
        plot: !args.no_plot,
        console,
    };
    let written = write_reports(&meta, &outputs, &profile, &args.out, options)?;
    tracing::info!(
        "{} analyses complete; {} files written to {}",
        selected.len(),
        written.len(),
        args.out.display()
    );
    Ok(written)
}

/// Concrete analyses in run order; empty or `all` selects everything.
fn resolve_analyses(requested: &[AnalysisKind]) -> Vec<AnalysisKind> {
    if requested.is_empty() || requested.contains(&AnalysisKind::All) {
        return RUN_ORDER.to_vec();
    }
    RUN_ORDER
        .into_iter()
        .filter(|kind| requested.contains(kind))
        .collect()
}

/// Every column the selected analyses read, checked once before any runs.
fn required_columns(selected: &[AnalysisKind], profile: &AnalysisProfile) -> Vec<String> {
    let mut columns = Vec::new();
    for kind in selected {
        match kind {
            AnalysisKind::Correlation => {
                columns.push(profile.group_column.to_string());
                columns.extend(correlation_columns(profile));
            }
            AnalysisKind::Reliability => columns.extend(reliability_columns(profile)),
            AnalysisKind::Summary => {
                columns.push(profile.group_column.to_string());
                columns.extend(summary_columns(profile));
            }
            AnalysisKind::Roc => {
                columns.push(profile.group_column.to_string());
                columns.extend(roc_columns(profile));
            }
            AnalysisKind::All => {}
        }
    }
    columns
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
