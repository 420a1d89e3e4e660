use super::*;
use crate::pipeline::fixtures::sample_dataset;
use crate::pipeline::stage2_correlation::run_correlation;
use crate::pipeline::stage3_reliability::run_reliability;
use crate::pipeline::stage4_summary::run_summary;
use crate::pipeline::stage5_roc::run_roc;

fn meta() -> RunMeta {
    RunMeta {
        tool_name: "osats-analyze".to_string(),
        tool_version: "0.1.0".to_string(),
        input: PathBuf::from("fixture.csv"),
        rows_read: 10,
        blank_rows_skipped: 0,
    }
}

fn all_outputs() -> AnalysisOutputs {
    let ds = sample_dataset();
    let profile = AnalysisProfile::default_v1();
    AnalysisOutputs {
        correlation: Some(run_correlation(&ds, &profile).unwrap()),
        reliability: Some(run_reliability(&ds, &profile).unwrap()),
        summary: Some(run_summary(&ds, &profile).unwrap()),
        roc: Some(run_roc(&ds, &profile).unwrap()),
    }
}

const QUIET: ReportOptions = ReportOptions {
    plot: false,
    console: false,
};

#[test]
fn test_writes_every_table_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested/out");
    let written = write_reports(
        &meta(),
        &all_outputs(),
        &AnalysisProfile::default_v1(),
        &out_dir,
        QUIET,
    )
    .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            CORRELATION_CSV,
            RELIABILITY_CSV,
            SUMMARY_CSV,
            ROC_CUTOFFS_CSV,
            ROC_CURVES_CSV,
            SUMMARY_JSON
        ]
    );
    assert!(!out_dir.join(ROC_SVG).exists());

    let corr = std::fs::read_to_string(out_dir.join(CORRELATION_CSV)).unwrap();
    assert!(corr.starts_with("Feature,Pearson r,p-value\nUWOMSA_A,0.929,0.000\n"));
    let summary = std::fs::read_to_string(out_dir.join(SUMMARY_CSV)).unwrap();
    assert!(summary.starts_with("Metric,Total,Expert,Novice/Intermediate,P-value\n"));
}

#[test]
fn test_summary_json_records_audits_and_roc() {
    let dir = tempfile::tempdir().unwrap();
    write_reports(
        &meta(),
        &all_outputs(),
        &AnalysisProfile::default_v1(),
        dir.path(),
        QUIET,
    )
    .unwrap();

    let text = std::fs::read_to_string(dir.path().join(SUMMARY_JSON)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["tool"]["name"], "osats-analyze");
    assert_eq!(json["input"]["rows_read"], 10);

    let analyses = json["analyses"].as_array().unwrap();
    assert_eq!(analyses.len(), 4);
    assert_eq!(analyses[0]["name"], "correlation");
    assert_eq!(analyses[0]["selections"][0]["dropped_rows"][0], 7);
    assert_eq!(analyses[1]["selections"].as_array().unwrap().len(), 8);

    let roc = json["roc"].as_array().unwrap();
    assert_eq!(roc.len(), 4);
    assert_eq!(roc[0]["name"], "Operative Time");
    assert_eq!(roc[0]["direction"], "lower_is_positive");
    assert_eq!(roc[0]["cutoff"], 45.0);
}

#[test]
fn test_only_selected_analyses_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = AnalysisOutputs {
        roc: all_outputs().roc,
        ..AnalysisOutputs::default()
    };
    let options = ReportOptions {
        plot: true,
        console: false,
    };
    let written = write_reports(
        &meta(),
        &outputs,
        &AnalysisProfile::default_v1(),
        dir.path(),
        options,
    )
    .unwrap();

    assert_eq!(written.len(), 4);
    assert!(dir.path().join(ROC_SVG).exists());
    assert!(!dir.path().join(CORRELATION_CSV).exists());

    let text = std::fs::read_to_string(dir.path().join(SUMMARY_JSON)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json["analyses"][0]["outputs"],
        serde_json::json!([ROC_CUTOFFS_CSV, ROC_CURVES_CSV, ROC_SVG])
    );
}
