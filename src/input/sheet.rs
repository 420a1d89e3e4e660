use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use crate::input::{Dataset, InputError, RawValue};

/// Reads the named worksheet (or the first one). The first row of the used
/// range is the header.
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<Dataset, InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| InputError::Parse(format!("{} has no worksheets", path.display())))??,
    };

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| InputError::Parse(format!("{} has an empty worksheet", path.display())))?;
    let headers: Vec<String> = header.iter().map(header_name).collect();
    let body: Vec<Vec<RawValue>> = rows
        .map(|row| row.iter().map(raw_value).collect())
        .collect();

    Dataset::from_rows(path, headers, body)
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

pub fn raw_value(cell: &Data) -> RawValue {
    match cell {
        Data::Empty | Data::Error(_) => RawValue::Empty,
        Data::Int(v) => RawValue::Number(*v as f64),
        Data::Float(v) => RawValue::Number(*v),
        Data::Bool(b) => RawValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => RawValue::from_text(s),
        other => RawValue::Text(other.to_string()),
    }
}
