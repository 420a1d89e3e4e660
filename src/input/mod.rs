use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod delimited;
pub mod sheet;
pub mod table;

pub use table::{Dataset, RawValue};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] calamine::Error),
    #[error("unsupported input format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    Delimited { delimiter: u8, gzip: bool },
}

pub fn detect_format(path: &Path) -> Result<InputFormat, InputError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let (stem, gzip) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };
    let ext = stem.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    match (ext, gzip) {
        ("xlsx" | "xlsm" | "xlsb" | "xls" | "ods", false) => Ok(InputFormat::Spreadsheet),
        ("csv", _) => Ok(InputFormat::Delimited {
            delimiter: b',',
            gzip,
        }),
        ("tsv" | "txt", _) => Ok(InputFormat::Delimited {
            delimiter: b'\t',
            gzip,
        }),
        _ => Err(InputError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Reads the whole table once. `sheet` selects a worksheet by name for
/// spreadsheet inputs and is ignored for delimited text.
pub fn load_dataset(path: &Path, sheet: Option<&str>) -> Result<Dataset, InputError> {
    if !path.exists() {
        return Err(InputError::MissingFile(path.to_path_buf()));
    }
    let format = detect_format(path)?;
    let dataset = match format {
        InputFormat::Spreadsheet => sheet::read_sheet(path, sheet)?,
        InputFormat::Delimited { delimiter, gzip } => {
            delimited::read_delimited(path, delimiter, gzip)?
        }
    };
    tracing::info!(
        "loaded {} rows x {} columns from {}",
        dataset.n_rows(),
        dataset.headers().len(),
        path.display()
    );
    Ok(dataset)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
