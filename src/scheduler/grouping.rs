//! Equipment grouping.
//!
//! Operations are grouped by their equipment string exactly as it appears
//! in the table. Workers are looked up by the folded key (trimmed,
//! lowercased) so user-entered equipment names match loosely. The worker
//! index is built once per call, so each group lookup is a single hash
//! probe instead of a scan with per-comparison string folding.

use std::collections::HashMap;

use crate::models::{equipment_key, OperationRecord, Worker};

/// Roster positions indexed by folded equipment key.
#[derive(Debug, Clone, Default)]
pub struct EquipmentIndex {
    by_key: HashMap<String, Vec<usize>>,
}

impl EquipmentIndex {
    /// Indexes a roster. Positions within each key keep roster order.
    pub fn build(workers: &[Worker]) -> Self {
        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, worker) in workers.iter().enumerate() {
            by_key.entry(worker.equipment_key()).or_default().push(idx);
        }
        Self { by_key }
    }

    /// Roster positions of workers declared on this equipment.
    pub fn workers_for(&self, equipment: &str) -> &[usize] {
        self.by_key
            .get(&equipment_key(equipment))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Operations sharing one equipment string, with its candidate workers.
#[derive(Debug, Clone)]
pub struct EquipmentGroup<'a> {
    /// Equipment string as written in the table.
    pub equipment: &'a str,
    /// Operations in record order.
    pub operations: Vec<&'a OperationRecord>,
    /// Roster positions of matching workers, in roster order.
    pub workers: Vec<usize>,
}

/// Partition of the operation list by equipment.
#[derive(Debug, Clone, Default)]
pub struct EquipmentGroups<'a> {
    /// Groups in order of first appearance, including groups without workers.
    pub groups: Vec<EquipmentGroup<'a>>,
    /// Operations with no equipment value; never assignable.
    pub ungrouped: Vec<&'a OperationRecord>,
}

impl<'a> EquipmentGroups<'a> {
    /// Groups `records` and attaches matching roster positions.
    pub fn build(records: &'a [OperationRecord], workers: &[Worker]) -> Self {
        let index = EquipmentIndex::build(workers);
        let mut position: HashMap<&'a str, usize> = HashMap::new();
        let mut result = Self::default();

        for record in records {
            let Some(equipment) = record.equipment_id.as_deref() else {
                result.ungrouped.push(record);
                continue;
            };

            let slot = *position.entry(equipment).or_insert_with(|| {
                result.groups.push(EquipmentGroup {
                    equipment,
                    operations: Vec::new(),
                    workers: index.workers_for(equipment).to_vec(),
                });
                result.groups.len() - 1
            });
            result.groups[slot].operations.push(record);
        }

        result
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no operation carried an equipment value.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
