//! Raw tabular input.
//!
//! A header row plus data rows of optional text cells. Empty fields are
//! absent (`None`); rows shorter than the header are padded with absent
//! cells, rows wider than the header are rejected.

use tracing::warn;

use crate::error::{AssignError, Result};

/// Untyped CSV table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Parses comma-separated text with a header row.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let width = headers.len();
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            if record.len() > width {
                return Err(AssignError::RaggedRow {
                    line,
                    expected: width,
                    found: record.len(),
                });
            }
            if record.len() < width {
                warn!(line, found = record.len(), expected = width, "padding short row");
            }

            let mut row: Vec<Option<String>> = record
                .iter()
                .map(|field| (!field.is_empty()).then(|| field.to_string()))
                .collect();
            row.resize(width, None);
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows.
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column with exactly this header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Like [`column_index`](Self::column_index), failing with a schema error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| AssignError::missing_column(name))
    }
}

/// Cell text at an optional column index.
pub fn cell(row: &[Option<String>], column: Option<usize>) -> Option<&str> {
    column.and_then(|i| row.get(i)).and_then(|c| c.as_deref())
}
