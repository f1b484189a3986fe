//! End-to-end assignment pipeline.
//!
//! # Flow
//!
//! 1. Decode and normalize the operations table.
//! 2. Group by equipment and assign greedily.
//! 3. Build the per-worker result table.
//! 4. Summarize totals and serialize the table as CSV.
//!
//! Each call owns all of its state; concurrent calls share nothing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

use crate::config::{AssignConfig, UnassignablePolicy};
use crate::error::Result;
use crate::ingest::read_operations;
use crate::models::{roster_from_json, OperationRecord, OutputRow, Worker};
use crate::report::{to_csv, TableBuilder};
use crate::scheduler::{AssignmentSummary, GreedyAssigner};

/// Result bundle of one assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Result table, ordered.
    pub table: Vec<OutputRow>,
    /// All aggregate figures.
    pub summary: AssignmentSummary,
    /// Total input time (minutes).
    pub total_sum: f64,
    /// Parallel completion time (minutes).
    pub max_parallel_time: f64,
    /// The table as BOM-prefixed CSV.
    pub result_csv: String,
    /// Dropped operations; filled only under [`UnassignablePolicy::Collect`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unassigned: Vec<OperationRecord>,
}

impl AssignmentResult {
    /// Serializes the bundle as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Runs the full pipeline on a CSV byte stream and a roster.
///
/// # Example
///
/// ```
/// use u_assign::config::AssignConfig;
/// use u_assign::models::Worker;
/// use u_assign::pipeline::process_operations;
///
/// let csv = "№ п/п,Обладнання,Розряд,\"Затрати часу, хв\"\n1,UM,3,2\n2,UM,4,1\n";
/// let workers = vec![Worker::new(1, 4, "UM"), Worker::new(2, 3, "UM")];
///
/// let result = process_operations(csv.as_bytes(), &workers, &AssignConfig::default()).unwrap();
/// assert_eq!(result.total_sum, 3.0);
/// assert_eq!(result.table.len(), 4);
/// ```
pub fn process_operations(
    bytes: &[u8],
    workers: &[Worker],
    config: &AssignConfig,
) -> Result<AssignmentResult> {
    warn_duplicate_ids(workers);

    let records = read_operations(bytes, config)?;
    let outcome = GreedyAssigner::new().assign(&records, workers);
    let table = TableBuilder::new(config).build(workers, &outcome);
    let summary = AssignmentSummary::calculate(&records, &outcome, config);
    let result_csv = to_csv(&table, config)?;

    let unassigned = match config.unassignable {
        UnassignablePolicy::Drop => Vec::new(),
        UnassignablePolicy::Collect => outcome.unassigned.iter().map(|&op| op.clone()).collect(),
    };

    info!(
        records = records.len(),
        workers = workers.len(),
        assigned = summary.assigned_count,
        dropped = summary.dropped_count,
        total_sum = summary.total_sum,
        max_parallel_time = summary.max_parallel_time,
        "assignment complete"
    );

    Ok(AssignmentResult {
        table,
        total_sum: summary.total_sum,
        max_parallel_time: summary.max_parallel_time,
        summary,
        result_csv,
        unassigned,
    })
}

/// Like [`process_operations`], with the roster given as JSON.
pub fn process_operations_json(
    bytes: &[u8],
    roster_json: &str,
    config: &AssignConfig,
) -> Result<AssignmentResult> {
    let workers = roster_from_json(roster_json)?;
    process_operations(bytes, &workers, config)
}

fn warn_duplicate_ids(workers: &[Worker]) {
    let mut seen = HashSet::new();
    for worker in workers {
        if !seen.insert(&worker.id) {
            warn!(worker = %worker.id, "duplicate worker id, treating as a separate worker");
        }
    }
}
