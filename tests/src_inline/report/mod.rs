use super::*;
use crate::stats::describe::Quartiles;

#[test]
fn test_round_to() {
    assert_eq!(round_to(0.8858795678, 3), 0.886);
    assert_eq!(round_to(-0.8319840, 3), -0.832);
    assert_eq!(round_to(2.5, 0), 3.0);
}

#[test]
fn test_format_fixed_and_missing() {
    assert_eq!(format_fixed(Some(0.92891), 3), "0.929");
    assert_eq!(format_fixed(Some(1.0), 3), "1.000");
    assert_eq!(format_fixed(None, 3), "NA");
    assert_eq!(format_fixed(Some(f64::NAN), 2), "NA");
}

#[test]
fn test_format_p_value_floor() {
    assert_eq!(format_p_value(Some(0.0), 0.001), "<0.001");
    assert_eq!(format_p_value(Some(0.000_999), 0.001), "<0.001");
    assert_eq!(format_p_value(Some(0.001), 0.001), "0.001");
    assert_eq!(format_p_value(Some(0.0319), 0.001), "0.032");
    assert_eq!(format_p_value(None, 0.001), "NA");
}

#[test]
fn test_format_descriptor() {
    let mean_sd = GroupDescriptor::MeanSd {
        mean: 52.444,
        sd: Some(16.4705),
    };
    assert_eq!(format_descriptor(Some(&mean_sd)), "52.44 ± 16.47");

    let single = GroupDescriptor::MeanSd {
        mean: 35.0,
        sd: None,
    };
    assert_eq!(format_descriptor(Some(&single)), "35.00 ± NA");

    let iqr = GroupDescriptor::MedianIqr {
        quartiles: Quartiles {
            q1: 4.0,
            median: 4.5,
            q3: 5.0,
        },
    };
    assert_eq!(format_descriptor(Some(&iqr)), "4.50 (4.00–5.00)");
    assert_eq!(format_descriptor(None), "NA");
}
