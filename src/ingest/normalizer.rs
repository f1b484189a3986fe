//! Record normalizer: raw table → typed operation records.
//!
//! # Rules
//!
//! | Field | Source | Malformed / missing |
//! |-------|--------|---------------------|
//! | time_cost | required column, cleaned decimal, 2 dp | 0.0 (negatives too) |
//! | required_grade | required column, cleaned, truncated | `malformed_grade_default` |
//! | sequence | optional column, decimal | `Unordered` |
//! | text fields | optional columns, verbatim | absent |
//!
//! Records are returned stably sorted by sequence, unordered last.

use tracing::debug;

use super::cells::{parse_grade, parse_time_cost};
use super::table::{cell, RawTable};
use crate::config::AssignConfig;
use crate::error::Result;
use crate::models::{sort_by_sequence, OperationRecord, SequenceKey};

/// Converts raw tables into normalized operation records.
#[derive(Debug, Clone)]
pub struct RecordNormalizer<'a> {
    config: &'a AssignConfig,
}

impl<'a> RecordNormalizer<'a> {
    /// Creates a normalizer for the configured column layout.
    pub fn new(config: &'a AssignConfig) -> Self {
        Self { config }
    }

    /// Normalizes every data row.
    ///
    /// Fails only when the time-cost or grade column is absent (checked in
    /// that order). Individual cells never fail.
    pub fn normalize(&self, table: &RawTable) -> Result<Vec<OperationRecord>> {
        let columns = &self.config.columns;
        let time_idx = table.require_column(&columns.time_cost)?;
        let grade_idx = table.require_column(&columns.grade)?;
        let sequence_idx = table.column_index(&columns.sequence);
        let equipment_idx = table.column_index(&columns.equipment);
        let code_idx = table.column_index(&columns.operation_code);
        let name_idx = table.column_index(&columns.operation_name);
        let notes_idx = table.column_index(&columns.technical_notes);

        let text = |row: &[Option<String>], idx| cell(row, idx).map(str::to_string);

        let mut records: Vec<OperationRecord> = table
            .rows()
            .iter()
            .enumerate()
            .map(|(row_index, row)| OperationRecord {
                row: row_index,
                sequence: SequenceKey::parse(cell(row, sequence_idx)),
                equipment_id: text(row, equipment_idx),
                required_grade: self.grade(cell(row, Some(grade_idx))),
                time_cost: Self::time_cost(cell(row, Some(time_idx))),
                operation_code: text(row, code_idx),
                operation_name: text(row, name_idx),
                technical_notes: text(row, notes_idx),
            })
            .collect();

        sort_by_sequence(&mut records, |r| r.sequence);

        debug!(
            records = records.len(),
            has_sequence = sequence_idx.is_some(),
            has_equipment = equipment_idx.is_some(),
            "normalized operation records"
        );
        Ok(records)
    }

    fn time_cost(raw: Option<&str>) -> f64 {
        parse_time_cost(raw).filter(|v| *v >= 0.0).unwrap_or(0.0)
    }

    fn grade(&self, raw: Option<&str>) -> u32 {
        parse_grade(raw)
            .and_then(|g| u32::try_from(g).ok())
            .unwrap_or(self.config.malformed_grade_default)
    }
}
