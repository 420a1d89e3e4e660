use std::path::{Path, PathBuf};

use crate::input::InputError;

/// One cell as read from the source, before numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Empty,
    Number(f64),
    Text(String),
}

impl RawValue {
    pub fn from_text(s: &str) -> Self {
        if s.trim().is_empty() {
            RawValue::Empty
        } else {
            RawValue::Text(s.to_string())
        }
    }

    /// Numeric coercion: unparseable or non-finite values are missing.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            RawValue::Empty => return None,
            RawValue::Number(v) => *v,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    /// String form used for categorical matching; missing cells read as "nan".
    pub fn as_category(&self) -> String {
        match self {
            RawValue::Empty => "nan".to_string(),
            RawValue::Number(v) => v.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawValue::Empty)
    }
}

/// Column-oriented, read-only view of the input table.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    headers: Vec<String>,
    columns: Vec<Vec<RawValue>>,
    n_rows: usize,
    blank_rows_skipped: usize,
}

impl Dataset {
    /// Builds a dataset from row-major cells. Short rows are padded with
    /// empty cells; fully blank rows are skipped; on duplicate headers the
    /// first column wins.
    pub fn from_rows(
        source: &Path,
        headers: Vec<String>,
        rows: Vec<Vec<RawValue>>,
    ) -> Result<Self, InputError> {
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(InputError::Parse(format!(
                "{} has no header row",
                source.display()
            )));
        }

        let width = headers.len();
        let mut columns: Vec<Vec<RawValue>> = vec![Vec::with_capacity(rows.len()); width];
        let mut n_rows = 0usize;
        let mut blank_rows_skipped = 0usize;

        for (line, row) in rows.into_iter().enumerate() {
            if row.iter().all(RawValue::is_empty) {
                blank_rows_skipped += 1;
                continue;
            }
            if row.len() > width {
                tracing::warn!(
                    "row {} has {} cells but the header has {}; extra cells ignored",
                    line + 2,
                    row.len(),
                    width
                );
            }
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.push(cells.next().unwrap_or(RawValue::Empty));
            }
            n_rows += 1;
        }

        for (idx, name) in headers.iter().enumerate() {
            if headers[..idx].contains(name) {
                tracing::warn!("duplicate column header {:?}; keeping the first", name);
            }
        }

        Ok(Self {
            source: source.to_path_buf(),
            headers,
            columns,
            n_rows,
            blank_rows_skipped,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn blank_rows_skipped(&self) -> usize {
        self.blank_rows_skipped
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn column(&self, name: &str) -> Option<&[RawValue]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    pub fn require_columns<S: AsRef<str>>(&self, names: &[S]) -> Result<(), InputError> {
        let mut missing: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref();
            if !self.has_column(name) && !missing.iter().any(|m| m == name) {
                missing.push(name.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::Schema { missing })
        }
    }

    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, InputError> {
        let column = self.column(name).ok_or_else(|| InputError::Schema {
            missing: vec![name.to_string()],
        })?;
        Ok(column.iter().map(RawValue::as_number).collect())
    }
}
