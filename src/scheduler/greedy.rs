//! Greedy load-balancing assignment engine.
//!
//! # Algorithm
//!
//! 1. Partition operations by equipment (see [`EquipmentGroups`]).
//! 2. For each group, walk operations in record order.
//! 3. Eligible workers are the group's workers with `grade >= required_grade`.
//! 4. Pick the eligible worker with the smallest cumulative load; on equal
//!    loads the earlier roster position wins.
//! 5. Append the operation to that worker and add its time to the load.
//!
//! An operation with no eligible worker is dropped. Assignments are never
//! revisited, so the result is a single-pass heuristic, not a makespan
//! optimum.
//!
//! # Complexity
//! O(n * e) where n=operations, e=eligible workers per operation.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (list scheduling)

use tracing::debug;

use super::grouping::EquipmentGroups;
use crate::models::{OperationRecord, Worker};

/// Per-call assignment state: one load and one operation list per roster
/// position, plus the operations nobody could take.
///
/// Built fresh by [`GreedyAssigner::assign`]; nothing outlives the call.
#[derive(Debug, Clone)]
pub struct AssignmentOutcome<'a> {
    /// Operations per roster position, in assignment order.
    pub assignments: Vec<Vec<&'a OperationRecord>>,
    /// Cumulative time per roster position (minutes).
    pub loads: Vec<f64>,
    /// Operations without an eligible worker, in encounter order.
    pub unassigned: Vec<&'a OperationRecord>,
}

impl<'a> AssignmentOutcome<'a> {
    /// Empty state with every worker at load 0.
    fn new(worker_count: usize) -> Self {
        Self {
            assignments: vec![Vec::new(); worker_count],
            loads: vec![0.0; worker_count],
            unassigned: Vec::new(),
        }
    }

    /// First candidate with the strictly smallest load. Any candidate can
    /// win, including one whose load has saturated to infinity.
    fn least_loaded(&self, candidates: impl IntoIterator<Item = usize>) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for idx in candidates {
            let load = self.loads[idx];
            match best {
                Some((_, best_load)) if load >= best_load => {}
                _ => best = Some((idx, load)),
            }
        }
        best.map(|(idx, _)| idx)
    }

    fn commit(&mut self, worker: usize, operation: &'a OperationRecord) {
        self.assignments[worker].push(operation);
        self.loads[worker] += operation.time_cost;
    }

    /// Number of assigned operations.
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().map(Vec::len).sum()
    }

    /// Largest worker load, 0.0 for an empty roster.
    pub fn max_load(&self) -> f64 {
        self.loads.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of worker loads.
    pub fn sum_of_loads(&self) -> f64 {
        self.loads.iter().sum()
    }
}

/// Streaming greedy assigner.
///
/// # Example
///
/// ```
/// use u_assign::models::{OperationRecord, Worker};
/// use u_assign::scheduler::GreedyAssigner;
///
/// let workers = vec![Worker::new(1, 4, "UM"), Worker::new(2, 3, "UM")];
/// let ops = vec![
///     OperationRecord::new("UM", 4, 1.0).with_sequence(2.0),
///     OperationRecord::new("UM", 3, 2.0).with_sequence(1.0),
/// ];
///
/// let outcome = GreedyAssigner::new().assign(&ops, &workers);
/// assert_eq!(outcome.loads, vec![1.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAssigner;

impl GreedyAssigner {
    /// Creates an assigner.
    pub fn new() -> Self {
        Self
    }

    /// Assigns `records` (already in processing order) to `workers`.
    pub fn assign<'a>(
        &self,
        records: &'a [OperationRecord],
        workers: &[Worker],
    ) -> AssignmentOutcome<'a> {
        let mut outcome = AssignmentOutcome::new(workers.len());
        let groups = EquipmentGroups::build(records, workers);

        for operation in &groups.ungrouped {
            debug!(row = operation.row, "dropping operation without equipment");
        }
        outcome.unassigned.extend(groups.ungrouped.iter().copied());

        for group in &groups.groups {
            for &operation in &group.operations {
                let eligible = group
                    .workers
                    .iter()
                    .copied()
                    .filter(|&idx| workers[idx].meets_grade(operation));

                match outcome.least_loaded(eligible) {
                    Some(idx) => {
                        debug!(
                            row = operation.row,
                            equipment = group.equipment,
                            worker = %workers[idx].id,
                            load = outcome.loads[idx],
                            "assigned operation"
                        );
                        outcome.commit(idx, operation);
                    }
                    None => {
                        debug!(
                            row = operation.row,
                            equipment = group.equipment,
                            required_grade = operation.required_grade,
                            "no eligible worker, dropping operation"
                        );
                        outcome.unassigned.push(operation);
                    }
                }
            }
        }

        outcome
    }
}
