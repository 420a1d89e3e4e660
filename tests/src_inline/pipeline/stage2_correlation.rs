use super::*;
use crate::pipeline::fixtures::sample_dataset;
use approx::assert_relative_eq;

#[test]
fn test_feature_names_strip_rater_and_unit() {
    let profile = AnalysisProfile::default_v1();
    assert_eq!(feature_name("UWOMSA_A_AP", &profile), "UWOMSA_A");
    assert_eq!(
        feature_name("Operative Time (Mins)", &profile),
        "Operative Time"
    );
}

#[test]
fn test_correlation_table_is_sorted_by_rounded_r() {
    let ds = sample_dataset();
    let profile = AnalysisProfile::default_v1();
    let out = run_correlation(&ds, &profile).unwrap();

    let order: Vec<&str> = out.rows.iter().map(|r| r.feature.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "UWOMSA_A",
            "Flow",
            "UWOMSA_C",
            "TnM",
            "Knowledge",
            "RfT",
            "UWOMSA_B",
            "Instrument",
            "Operative Time",
        ]
    );
    assert_eq!(out.audit.dropped_rows, vec![7]);
    assert!(out.warnings.is_empty());

    let top = &out.rows[0];
    assert_eq!(top.n, 9);
    assert_relative_eq!(top.pearson_r.unwrap(), 0.928_919_062_674_461_3, epsilon = 1e-12);
    assert_relative_eq!(top.p_value.unwrap(), 2.939_490_781_726_138e-4, epsilon = 1e-8);

    let time = out.rows.last().unwrap();
    assert_relative_eq!(time.pearson_r.unwrap(), -0.831_984_026_060_048, epsilon = 1e-12);
    assert_relative_eq!(time.p_value.unwrap(), 0.005_408_862_345_070_03, epsilon = 1e-8);
}

#[test]
fn test_constant_feature_is_reported_not_fatal() {
    let csv = "Group,UWOMSA_A_AP,UWOMSA_B_AP,UWOMSA_C_AP,RfT_AP,TnM_AP,Instrument_AP,Flow_AP,Knowledge_AP,Operative Time (Mins)\n\
Expert,5,4,5,5,5,4,5,5,30\n\
Novice,2,3,2,3,2,4,3,2,60\n\
Expert,4,5,5,4,5,4,4,5,35\n\
Novice,3,2,3,2,3,4,2,3,70\n";
    let mut lines = csv.lines();
    let headers: Vec<String> = lines.next().unwrap().split(',').map(str::to_string).collect();
    let rows = lines
        .map(|l| l.split(',').map(crate::input::RawValue::from_text).collect())
        .collect();
    let ds = Dataset::from_rows(std::path::Path::new("t.csv"), headers, rows).unwrap();

    let out = run_correlation(&ds, &AnalysisProfile::default_v1()).unwrap();
    let instrument = out.rows.iter().find(|r| r.feature == "Instrument").unwrap();
    assert_eq!(instrument.pearson_r, None);
    assert_eq!(out.rows.last().unwrap().feature, "Instrument");
    assert_eq!(out.warnings.len(), 1);
}
