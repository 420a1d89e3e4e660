pub mod stage1_clean;
pub mod stage2_correlation;
pub mod stage3_reliability;
pub mod stage4_summary;
pub mod stage5_roc;
pub mod stage6_report;

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/fixtures.rs"]
pub(crate) mod fixtures;
