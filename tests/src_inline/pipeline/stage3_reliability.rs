use super::*;
use crate::pipeline::fixtures::sample_dataset;
use approx::assert_relative_eq;

#[test]
fn test_reliability_columns_pair_raters() {
    let cols = reliability_columns(&AnalysisProfile::default_v1());
    assert_eq!(cols.len(), 16);
    assert_eq!(&cols[..2], ["UWOMSA_A_AP", "UWOMSA_A_SW"]);
    assert_eq!(&cols[6..8], ["Instrument_AP", "Instrument_SW"]);
}

#[test]
fn test_reliability_rows_in_report_order() {
    let out = run_reliability(&sample_dataset(), &AnalysisProfile::default_v1()).unwrap();
    let domains: Vec<&str> = out.rows.iter().map(|r| r.domain.as_str()).collect();
    assert_eq!(
        domains,
        vec![
            "UWOMSA A PREPARATION",
            "UWOMSA B SUTURING",
            "UWOMSA C FINAL PRODUCT",
            "INSTRUMENT HANDLING",
            "RESPECT FOR TISSUE",
            "TIME AND MOTION",
            "FLOW OF OPERATION",
            "KNOWLEDGE OF PROCEDURE",
        ]
    );
    assert!(out.warnings.is_empty());
    assert_eq!(out.audits.len(), 8);
}

#[test]
fn test_pairwise_deletion_per_domain() {
    let out = run_reliability(&sample_dataset(), &AnalysisProfile::default_v1()).unwrap();
    let rft = &out.rows[4];
    assert_eq!(rft.n, 9);
    assert_eq!(out.audits[4].dropped_rows, vec![8]);
    // operative time is not part of any pair, so row 7 survives elsewhere
    assert_eq!(out.rows[0].n, 10);
    assert!(out.audits[0].dropped_rows.is_empty());
}

#[test]
fn test_identical_raters_agree_perfectly() {
    let out = run_reliability(&sample_dataset(), &AnalysisProfile::default_v1()).unwrap();
    let flow = &out.rows[6];
    assert_relative_eq!(flow.pearson.unwrap().r, 1.0, epsilon = 1e-12);
    assert!(flow.pearson.unwrap().p_value < 1e-6);
    assert_eq!(flow.kappa, Some(1.0));
    assert_eq!(flow.strength, Some(CorrelationStrength::High));
    assert_eq!(flow.agreement, Some(KappaAgreement::AlmostPerfect));
}

#[test]
fn test_partial_agreement_matches_reference() {
    let out = run_reliability(&sample_dataset(), &AnalysisProfile::default_v1()).unwrap();

    let c = &out.rows[2];
    assert_relative_eq!(c.pearson.unwrap().r, 0.962_751_936_132_903_6, epsilon = 1e-12);
    assert_relative_eq!(c.kappa.unwrap(), 0.864_864_864_864_864_9, epsilon = 1e-12);

    let knowledge = &out.rows[7];
    assert_relative_eq!(
        knowledge.pearson.unwrap().r,
        0.964_022_550_424_301_3,
        epsilon = 1e-12
    );
    assert_relative_eq!(knowledge.kappa.unwrap(), 0.866_666_666_666_666_7, epsilon = 1e-12);
    assert_eq!(knowledge.agreement, Some(KappaAgreement::AlmostPerfect));
}

#[test]
fn test_constant_raters_are_reported_as_missing() {
    let profile = AnalysisProfile::default_v1();
    let mut headers = vec!["Group".to_string()];
    headers.extend(reliability_columns(&profile));
    let rows = (0..4)
        .map(|row| {
            let mut cells = vec![crate::input::RawValue::from_text("Expert")];
            for name in &headers[1..] {
                let v = if name.starts_with("Flow") {
                    4.0
                } else {
                    (row % 3) as f64 + 2.0
                };
                cells.push(crate::input::RawValue::Number(v));
            }
            cells
        })
        .collect();
    let ds = Dataset::from_rows(std::path::Path::new("t.csv"), headers, rows).unwrap();

    let out = run_reliability(&ds, &profile).unwrap();
    let flow = &out.rows[6];
    assert_eq!(flow.pearson, None);
    assert_eq!(flow.strength, None);
    assert_eq!(flow.kappa, None);
    assert_eq!(out.warnings.len(), 2);
    assert_eq!(out.rows[0].kappa, Some(1.0));
}
