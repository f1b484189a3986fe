//! Delimited-text export of the result table.
//!
//! Output is UTF-8 with a leading byte-order mark so spreadsheet
//! applications detect the encoding. Absent cells are written empty.

use std::io;

use crate::config::AssignConfig;
use crate::error::Result;
use crate::models::{OutputRow, SequenceCell};

const BOM: &str = "\u{feff}";

/// Serializes rows as BOM-prefixed CSV with headers from `config.columns`.
pub fn to_csv(rows: &[OutputRow], config: &AssignConfig) -> Result<String> {
    let columns = &config.columns;
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        columns.worker.as_str(),
        columns.grade.as_str(),
        columns.equipment.as_str(),
        columns.sequence.as_str(),
        columns.operation_code.as_str(),
        columns.operation_name.as_str(),
        columns.time_cost.as_str(),
        columns.technical_notes.as_str(),
    ])?;

    for row in rows {
        let sequence = match &row.sequence {
            SequenceCell::Ordinal(v) => v.to_string(),
            SequenceCell::Placeholder(s) => s.clone(),
            SequenceCell::Absent => String::new(),
        };
        writer.write_record([
            row.worker_id.to_string().as_str(),
            row.worker_grade.to_string().as_str(),
            row.equipment.as_str(),
            sequence.as_str(),
            row.operation_code.as_deref().unwrap_or_default(),
            row.operation_name.as_deref().unwrap_or_default(),
            format!("{:.2}", row.time_cost).as_str(),
            row.technical_notes.as_deref().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(io::Error::other(err.to_string())))?;
    let mut out = String::with_capacity(BOM.len() + bytes.len());
    out.push_str(BOM);
    out.push_str(&String::from_utf8_lossy(&bytes));
    Ok(out)
}
