use super::*;
use crate::pipeline::fixtures::sample_dataset;
use crate::stats::hypothesis::TestMethod;
use approx::assert_relative_eq;

fn mean_sd(d: Option<GroupDescriptor>) -> (f64, f64) {
    match d {
        Some(GroupDescriptor::MeanSd { mean, sd: Some(sd) }) => (mean, sd),
        other => panic!("expected mean and sd, got {other:?}"),
    }
}

fn iqr(d: Option<GroupDescriptor>) -> (f64, f64, f64) {
    match d {
        Some(GroupDescriptor::MedianIqr { quartiles: q }) => (q.q1, q.median, q.q3),
        other => panic!("expected quartiles, got {other:?}"),
    }
}

#[test]
fn test_metric_order_and_labels() {
    let metrics = summary_metrics(&AnalysisProfile::default_v1());
    let labels: Vec<&str> = metrics.iter().map(|(l, _, _)| l.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Operative Time (Minutes)",
            "Respect for Tissue",
            "Time and Motion",
            "Instrument Handling",
            "Flow of Operation",
            "Knowledge of Procedure",
            "UWOMSA A (Dexterity)",
            "UWOMSA B (Patency)",
            "UWOMSA C (Leak/Flow)",
        ]
    );
    assert_eq!(metrics[0].2, MetricKind::MeanSd);
    assert!(metrics[1..].iter().all(|m| m.2 == MetricKind::MedianIqr));
}

#[test]
fn test_operative_time_uses_mean_sd_and_welch() {
    let out = run_summary(&sample_dataset(), &AnalysisProfile::default_v1()).unwrap();
    assert_eq!(out.audit.dropped_rows, vec![7]);
    let time = &out.rows[0];
    assert_eq!((time.n_expert, time.n_novice), (4, 5));

    let (m, sd) = mean_sd(time.total);
    assert_relative_eq!(m, 472.0 / 9.0, epsilon = 1e-12);
    assert_relative_eq!(sd, 16.470_512_371_440_6, epsilon = 1e-9);
    let (m, sd) = mean_sd(time.expert);
    assert_relative_eq!(m, 38.0, epsilon = 1e-12);
    assert_relative_eq!(sd, 5.715_476_066_494_082, epsilon = 1e-9);
    let (m, sd) = mean_sd(time.novice);
    assert_relative_eq!(m, 64.0, epsilon = 1e-12);
    assert_relative_eq!(sd, 11.937_336_386_313_323, epsilon = 1e-9);

    let test = time.test.unwrap();
    assert_eq!(test.method, TestMethod::WelchT);
    assert_relative_eq!(test.statistic, -4.293_758_683_992_806, epsilon = 1e-9);
    assert_relative_eq!(test.p_value, 0.005_191_956_987_838_7, epsilon = 1e-7);
}

#[test]
fn test_domain_scores_use_quartiles_and_mann_whitney() {
    let out = run_summary(&sample_dataset(), &AnalysisProfile::default_v1()).unwrap();

    let rft = &out.rows[1];
    assert_eq!(rft.column, "RfT_AP");
    assert_eq!(iqr(rft.total), (3.0, 4.0, 4.0));
    assert_eq!(iqr(rft.expert), (4.0, 4.5, 5.0));
    assert_eq!(iqr(rft.novice), (2.0, 3.0, 3.0));
    let test = rft.test.unwrap();
    assert_eq!(test.method, TestMethod::MannWhitneyAsymptotic);
    assert_eq!(test.statistic, 19.0);
    assert_relative_eq!(test.p_value, 0.031_906_013_342_821_296, epsilon = 1e-9);

    let a = &out.rows[6];
    assert_eq!(iqr(a.expert), (4.75, 5.0, 5.0));
    assert_relative_eq!(a.test.unwrap().p_value, 0.015_541_208_983_595_884, epsilon = 1e-9);
    assert!(out.warnings.is_empty());
}

#[test]
fn test_single_expert_reports_missing_test() {
    let csv = crate::pipeline::fixtures::SAMPLE_CSV;
    let mut lines = csv.lines();
    let headers: Vec<String> = lines.next().unwrap().split(',').map(str::to_string).collect();
    let rows = lines
        .enumerate()
        .filter(|(i, _)| *i == 0 || *i >= 4)
        .map(|(_, l)| l.split(',').map(crate::input::RawValue::from_text).collect())
        .collect();
    let ds = Dataset::from_rows(std::path::Path::new("t.csv"), headers, rows).unwrap();

    let out = run_summary(&ds, &AnalysisProfile::default_v1()).unwrap();
    let time = &out.rows[0];
    assert_eq!(time.n_expert, 1);
    assert!(time.test.is_none());
    assert_eq!(
        time.expert,
        Some(GroupDescriptor::MeanSd {
            mean: 35.0,
            sd: None
        })
    );
    // rank tests still run with one observation per group
    assert!(out.rows[1].test.is_some());
    assert_eq!(out.warnings.len(), 1);
}
