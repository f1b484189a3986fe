//! Output table builder.
//!
//! # Layout
//!
//! For every roster worker, in roster order:
//! - one row per assigned operation, sorted by sequence (unordered last),
//! - one synthetic total row carrying the worker's final load.
//!
//! The concatenated table is then stably re-sorted by sequence. This
//! interleaves workers by original operation order and moves every row
//! without a numeric sequence, total rows included, behind the ordered
//! rows. With fully numbered input the totals end up as one trailing
//! block in roster order.

use crate::config::AssignConfig;
use crate::ingest::cells::round2;
use crate::models::{sort_by_sequence, OutputRow, RowKind, SequenceCell, Worker};
use crate::scheduler::AssignmentOutcome;

/// Builds the result table from the final assignment state.
#[derive(Debug, Clone)]
pub struct TableBuilder<'a> {
    config: &'a AssignConfig,
}

impl<'a> TableBuilder<'a> {
    /// Creates a builder using the configured labels.
    pub fn new(config: &'a AssignConfig) -> Self {
        Self { config }
    }

    /// Builds the ordered table.
    pub fn build(&self, workers: &[Worker], outcome: &AssignmentOutcome<'_>) -> Vec<OutputRow> {
        let mut rows = Vec::with_capacity(outcome.assigned_count() + workers.len());

        for (idx, worker) in workers.iter().enumerate() {
            let mut assigned = outcome.assignments[idx].clone();
            sort_by_sequence(&mut assigned, |op| op.sequence);

            rows.extend(assigned.into_iter().map(|op| OutputRow {
                kind: RowKind::Operation,
                worker_id: worker.id.clone(),
                worker_grade: worker.grade,
                equipment: worker.equipment.clone(),
                sequence: SequenceCell::from(op.sequence),
                operation_code: op.operation_code.clone(),
                operation_name: op.operation_name.clone(),
                time_cost: round2(op.time_cost),
                technical_notes: op.technical_notes.clone(),
            }));

            rows.push(self.total_row(worker, outcome.loads[idx]));
        }

        sort_by_sequence(&mut rows, |row| row.sequence.key());
        rows
    }

    fn total_row(&self, worker: &Worker, load: f64) -> OutputRow {
        OutputRow {
            kind: RowKind::WorkerTotal,
            worker_id: worker.id.clone(),
            worker_grade: worker.grade,
            equipment: worker.equipment.clone(),
            sequence: SequenceCell::Placeholder(self.config.placeholder.clone()),
            operation_code: Some(self.config.placeholder.clone()),
            operation_name: Some(self.config.total_label.clone()),
            time_cost: if load.is_finite() { round2(load) } else { 0.0 },
            technical_notes: Some(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationRecord, WorkerId};
    use crate::scheduler::GreedyAssigner;

    fn op(grade: u32, time: f64, seq: f64) -> OperationRecord {
        OperationRecord::new("UM", grade, time)
            .with_sequence(seq)
            .with_name(format!("op{seq}"))
    }

    fn build(ops: &[OperationRecord], workers: &[Worker]) -> Vec<OutputRow> {
        let config = AssignConfig::default();
        let outcome = GreedyAssigner::new().assign(ops, workers);
        TableBuilder::new(&config).build(workers, &outcome)
    }

    #[test]
    fn test_table_layout() {
        let workers = vec![Worker::new(1, 4, "UM"), Worker::new(2, 3, "UM")];
        let ops = vec![op(4, 1.0, 2.0), op(3, 2.0, 1.0)];
        let rows = build(&ops, &workers);

        assert_eq!(rows.len(), 4);
        // Operations interleaved by sequence
        assert_eq!(rows[0].sequence, SequenceCell::Ordinal(1.0));
        assert_eq!(rows[0].worker_id, WorkerId::Number(2));
        assert_eq!(rows[1].sequence, SequenceCell::Ordinal(2.0));
        assert_eq!(rows[1].worker_id, WorkerId::Number(1));
        // Totals last, roster order
        assert!(rows[2].is_total());
        assert_eq!(rows[2].worker_id, WorkerId::Number(1));
        assert!((rows[2].time_cost - 1.0).abs() < 1e-10);
        assert!(rows[3].is_total());
        assert_eq!(rows[3].worker_id, WorkerId::Number(2));
        assert!((rows[3].time_cost - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_total_row_fields() {
        let workers = vec![Worker::new("w1", 4, " UM ")];
        let rows = build(&[], &workers);
        assert_eq!(rows.len(), 1);
        let total = &rows[0];
        assert_eq!(total.kind, RowKind::WorkerTotal);
        assert_eq!(total.equipment, " UM ");
        assert_eq!(total.sequence, SequenceCell::Placeholder("-".into()));
        assert_eq!(total.operation_code.as_deref(), Some("-"));
        assert_eq!(total.operation_name.as_deref(), Some("ВСЬОГО ДЛЯ РОБІТНИКА"));
        assert_eq!(total.technical_notes.as_deref(), Some(""));
        assert_eq!(total.time_cost, 0.0);
    }

    #[test]
    fn test_every_worker_has_one_total() {
        let workers = vec![
            Worker::new(1, 4, "UM"),
            Worker::new(2, 4, "ВТО"),
            Worker::new(3, 1, "UM"),
        ];
        let ops = vec![op(4, 1.0, 1.0), op(4, 1.0, 2.0), op(2, 1.0, 3.0)];
        let rows = build(&ops, &workers);
        for id in 1..=3 {
            let totals = rows
                .iter()
                .filter(|r| r.is_total() && r.worker_id == WorkerId::Number(id))
                .count();
            assert_eq!(totals, 1);
        }
    }

    #[test]
    fn test_unordered_operations_precede_totals() {
        let workers = vec![Worker::new(1, 4, "UM")];
        let unordered = OperationRecord::new("UM", 1, 0.5).with_name("loose");
        let ops = vec![op(1, 1.0, 1.0), unordered];
        let rows = build(&ops, &workers);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].sequence, SequenceCell::Ordinal(1.0));
        assert_eq!(rows[1].sequence, SequenceCell::Absent);
        assert_eq!(rows[1].operation_name.as_deref(), Some("loose"));
        assert!(rows[2].is_total());
        assert!((rows[2].time_cost - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_dropped_operations_absent() {
        let workers = vec![Worker::new(1, 1, "UM")];
        let ops = vec![op(3, 9.0, 1.0)];
        let rows = build(&ops, &workers);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_total());
        assert_eq!(rows[0].time_cost, 0.0);
    }
}
