//! Fixed-operations validation pipeline.
//!
//! Cleans a fixed-operations table and removes rows that cannot be used:
//! - negative time cost
//! - negative grade
//! - empty or whitespace-only operation name (when the column exists)
//! - exact duplicates of an earlier row (after cleaning)
//!
//! Surviving rows are stably sorted by sequence number. No assignment is
//! performed. Unlike the assignment pipeline, input must be UTF-8.

use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;

use crate::config::AssignConfig;
use crate::error::Result;
use crate::ingest::cells::{parse_grade, parse_time_cost, round2};
use crate::ingest::{decode_utf8, RawTable};
use crate::models::{sort_by_sequence, CellValue, Record, SequenceKey};

/// Rows removed, by reason. Each row is counted under the first rule it fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemovalCounts {
    pub negative_time: usize,
    pub negative_grade: usize,
    pub empty_name: usize,
    pub duplicates: usize,
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct FixedOperationsReport {
    /// Data rows read.
    pub total_before: usize,
    /// Rows kept.
    pub total_after: usize,
    /// Rows removed.
    pub filtered_count: usize,
    /// Wall-clock duration, seconds, 2 decimals.
    pub processing_time_sec: f64,
    /// Removal breakdown.
    pub removed: RemovalCounts,
    /// Kept rows, every input column in header order.
    pub data: Vec<Record>,
}

/// Validates and deduplicates a fixed-operations CSV.
///
/// Fails on non-UTF-8 input or when the time-cost or grade column is
/// missing.
pub fn process_fixed_operations(bytes: &[u8], config: &AssignConfig) -> Result<FixedOperationsReport> {
    let started = Instant::now();
    let columns = &config.columns;

    let table = RawTable::parse(decode_utf8(bytes)?)?;
    let total_before = table.len();

    let time_idx = table.require_column(&columns.time_cost)?;
    let grade_idx = table.require_column(&columns.grade)?;
    let sequence_idx = table.column_index(&columns.sequence);
    let name_idx = table.column_index(&columns.operation_name);

    let mut removed = RemovalCounts::default();
    let mut seen: HashSet<Record> = HashSet::new();
    let mut kept: Vec<(SequenceKey, Record)> = Vec::new();

    for row in table.rows() {
        let time = parse_time_cost(row[time_idx].as_deref()).unwrap_or(0.0);
        if time < 0.0 {
            removed.negative_time += 1;
            continue;
        }

        let grade = parse_grade(row[grade_idx].as_deref())
            .unwrap_or(i64::from(config.malformed_grade_default));
        if grade < 0 {
            removed.negative_grade += 1;
            continue;
        }

        if let Some(idx) = name_idx {
            if row[idx].as_deref().map_or(true, |name| name.trim().is_empty()) {
                removed.empty_name += 1;
                continue;
            }
        }

        let sequence = sequence_idx
            .map(|idx| SequenceKey::parse(row[idx].as_deref()))
            .unwrap_or(SequenceKey::Unordered);

        let fields = table
            .headers()
            .iter()
            .zip(row)
            .enumerate()
            .map(|(idx, (header, raw))| {
                let value = if idx == time_idx {
                    CellValue::Decimal(round2(time))
                } else if idx == grade_idx {
                    CellValue::Integer(grade)
                } else if Some(idx) == sequence_idx {
                    sequence.ordinal().map_or(CellValue::Absent, CellValue::Decimal)
                } else {
                    raw.clone().map_or(CellValue::Absent, CellValue::Text)
                };
                (header.clone(), value)
            })
            .collect();
        let record = Record::new(fields);

        if !seen.insert(record.clone()) {
            removed.duplicates += 1;
            continue;
        }
        kept.push((sequence, record));
    }

    sort_by_sequence(&mut kept, |(key, _)| *key);
    let data: Vec<Record> = kept.into_iter().map(|(_, record)| record).collect();

    let total_after = data.len();
    let report = FixedOperationsReport {
        total_before,
        total_after,
        filtered_count: total_before - total_after,
        processing_time_sec: round2(started.elapsed().as_secs_f64()),
        removed,
        data,
    };

    info!(
        total_before = report.total_before,
        total_after = report.total_after,
        filtered = report.filtered_count,
        "fixed operations validated"
    );
    Ok(report)
}
