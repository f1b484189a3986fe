//! Run summary figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | total_sum | Sum of input time costs, excluding carried-over total rows |
//! | max_worker_load | Largest final worker load (makespan) |
//! | sum_of_loads | Sum of final worker loads |
//! | max_parallel_time | One of the two above, per [`ParallelTimeMode`] |
//!
//! All figures are rounded to 2 decimals and replaced by 0.0 if not finite.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use super::greedy::AssignmentOutcome;
use crate::config::{AssignConfig, ParallelTimeMode};
use crate::ingest::cells::round2;
use crate::models::OperationRecord;

/// Aggregate figures of one assignment run (minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    /// Total time of all real input operations.
    pub total_sum: f64,
    /// Parallel-completion figure, interpreted per configuration.
    pub max_parallel_time: f64,
    /// Largest single worker load.
    pub max_worker_load: f64,
    /// Sum of all worker loads.
    pub sum_of_loads: f64,
    /// Operations assigned to some worker.
    pub assigned_count: usize,
    /// Operations dropped, either for lack of an eligible worker or for
    /// lacking an equipment cell.
    pub dropped_count: usize,
}

impl AssignmentSummary {
    /// Computes the summary from the normalized input and the final state.
    pub fn calculate(
        records: &[OperationRecord],
        outcome: &AssignmentOutcome<'_>,
        config: &AssignConfig,
    ) -> Self {
        let total_sum = records
            .iter()
            .filter(|r| !r.is_total_row(&config.total_label))
            .map(|r| r.time_cost)
            .sum::<f64>();

        let max_worker_load = finite_rounded(outcome.max_load());
        let sum_of_loads = finite_rounded(outcome.sum_of_loads());
        let max_parallel_time = match config.parallel_time {
            ParallelTimeMode::MaxLoad => max_worker_load,
            ParallelTimeMode::SumOfLoads => sum_of_loads,
        };

        Self {
            total_sum: finite_rounded(total_sum),
            max_parallel_time,
            max_worker_load,
            sum_of_loads,
            assigned_count: outcome.assigned_count(),
            dropped_count: outcome.unassigned.len(),
        }
    }
}

fn finite_rounded(value: f64) -> f64 {
    if value.is_finite() {
        round2(value)
    } else {
        0.0
    }
}
