use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::pipeline::stage4_summary::GroupDescriptor;

pub mod json;
pub mod plot;
pub mod table;
pub mod text;

pub const MISSING: &str = "NA";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("plot error: {0}")]
    Plot(String),
}

/// Half-away-from-zero rounding to `decimals` places.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}

pub fn format_fixed(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(v) if v.is_finite() => format!("{:.*}", decimals, v),
        _ => MISSING.to_string(),
    }
}

/// `<floor` below the floor, otherwise three decimals.
pub fn format_p_value(p: Option<f64>, floor: f64) -> String {
    match p {
        Some(p) if p < floor => format!("<{floor}"),
        other => format_fixed(other, 3),
    }
}

/// `mean ± sd` or `median (q1–q3)`, two decimals.
pub fn format_descriptor(d: Option<&GroupDescriptor>) -> String {
    match d {
        Some(GroupDescriptor::MeanSd { mean, sd }) => {
            format!("{:.2} ± {}", mean, format_fixed(*sd, 2))
        }
        Some(GroupDescriptor::MedianIqr { quartiles: q }) => {
            format!("{:.2} ({:.2}–{:.2})", q.median, q.q1, q.q3)
        }
        None => MISSING.to_string(),
    }
}

pub fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
