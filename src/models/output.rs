//! Output table rows.
//!
//! The result table holds one row per assigned operation plus one
//! synthetic total row per roster worker. Absent cells serialize as
//! `null` (JSON) or an empty field (CSV), never as a NaN.

use serde::{Deserialize, Serialize};

use super::{SequenceKey, WorkerId};

/// Sequence cell of an output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SequenceCell {
    /// Ordinal carried over from the operation.
    Ordinal(f64),
    /// Non-numeric marker (total rows).
    Placeholder(String),
    /// The operation had no usable sequence number.
    Absent,
}

impl SequenceCell {
    /// Sort key: only ordinals are ordered.
    pub fn key(&self) -> SequenceKey {
        match self {
            Self::Ordinal(v) => SequenceKey::Ordinal(*v),
            Self::Placeholder(_) | Self::Absent => SequenceKey::Unordered,
        }
    }
}

impl From<SequenceKey> for SequenceCell {
    fn from(key: SequenceKey) -> Self {
        match key {
            SequenceKey::Ordinal(v) => Self::Ordinal(v),
            SequenceKey::Unordered => Self::Absent,
        }
    }
}

/// Row classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// An assigned operation.
    Operation,
    /// The synthetic per-worker total.
    WorkerTotal,
}

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub kind: RowKind,
    pub worker_id: WorkerId,
    pub worker_grade: u32,
    /// Worker's declared equipment, verbatim.
    pub equipment: String,
    pub sequence: SequenceCell,
    pub operation_code: Option<String>,
    pub operation_name: Option<String>,
    /// Minutes, rounded to 2 decimals.
    pub time_cost: f64,
    pub technical_notes: Option<String>,
}

impl OutputRow {
    /// Whether this is a synthetic total row.
    #[inline]
    pub fn is_total(&self) -> bool {
        self.kind == RowKind::WorkerTotal
    }
}
