use super::*;
use crate::pipeline::fixtures::sample_dataset;
use crate::pipeline::stage2_correlation::run_correlation;
use crate::pipeline::stage3_reliability::run_reliability;
use crate::pipeline::stage4_summary::run_summary;
use crate::pipeline::stage5_roc::run_roc;

#[test]
fn test_correlation_table_cells() {
    let profile = AnalysisProfile::default_v1();
    let table = correlation_table(&run_correlation(&sample_dataset(), &profile).unwrap());
    assert_eq!(table.headers, ["Feature", "Pearson r", "p-value"]);
    assert_eq!(table.rows[0], ["UWOMSA_A", "0.929", "0.000"]);
    assert_eq!(table.rows[8], ["Operative Time", "-0.832", "0.005"]);
}

#[test]
fn test_reliability_table_floors_p_values() {
    let profile = AnalysisProfile::default_v1();
    let table = reliability_table(
        &run_reliability(&sample_dataset(), &profile).unwrap(),
        &profile,
    );
    assert_eq!(
        table.rows[0],
        [
            "UWOMSA A PREPARATION",
            "1.000",
            "High Degree",
            "<0.001",
            "1.000",
            "Almost perfect"
        ]
    );
    assert_eq!(table.rows[2][4], "0.865");
}

#[test]
fn test_summary_table_descriptors() {
    let profile = AnalysisProfile::default_v1();
    let table = summary_table(&run_summary(&sample_dataset(), &profile).unwrap());
    assert_eq!(
        table.rows[0],
        [
            "Operative Time (Minutes)",
            "52.44 ± 16.47",
            "38.00 ± 5.72",
            "64.00 ± 11.94",
            "0.005"
        ]
    );
    assert_eq!(table.rows[1][2], "4.50 (4.00–5.00)");
}

#[test]
fn test_roc_tables() {
    let profile = AnalysisProfile::default_v1();
    let out = run_roc(&sample_dataset(), &profile).unwrap();

    let cutoffs = roc_cutoff_table(&out);
    assert_eq!(cutoffs.headers.len(), 9);
    assert_eq!(
        cutoffs.rows[0],
        [
            "Operative Time",
            "lower",
            "1.000",
            "45.000",
            "1.000",
            "1.000",
            "1.000",
            "0.000",
            "1.000"
        ]
    );

    let curves = roc_curve_table(&out);
    assert_eq!(curves.rows[0][..3], ["Operative Time", "0", "-inf"]);
    let points: usize = out.entries.iter().map(|e| e.result.curve.len()).sum();
    assert_eq!(curves.rows.len(), points);
}

#[test]
fn test_write_csv_quotes_and_headers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.csv");
    let mut table = Table::new("t", &["Domain", "Cohen's Kappa"]);
    table.push(vec!["UWOMSA C, FINAL".to_string(), "NA".to_string()]);
    write_csv(&table, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Domain,Cohen's Kappa\n\"UWOMSA C, FINAL\",NA\n");
}
