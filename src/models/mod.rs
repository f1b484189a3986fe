//! Assignment domain models.
//!
//! Input records, the worker roster, and the rows of the result table.
//! Every value is built, used and discarded within a single pipeline call.
//!
//! # Domain Mappings
//!
//! | u-assign | Scheduling | Shop floor |
//! |----------|------------|------------|
//! | OperationRecord | Activity | Technological operation |
//! | Worker | Resource | Operator at a station |
//! | Equipment | Resource type | Machine / station category |
//! | Grade | Skill level | Qualification rank |

mod operation;
mod output;
mod record;
mod worker;

pub use operation::{sort_by_sequence, OperationRecord, SequenceKey};
pub use output::{OutputRow, RowKind, SequenceCell};
pub use record::{CellValue, Record};
pub use worker::{equipment_key, roster_from_json, Worker, WorkerId};
