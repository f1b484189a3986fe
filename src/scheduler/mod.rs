//! Equipment grouping, greedy assignment and run summary.
//!
//! # Algorithm
//!
//! `GreedyAssigner` is a streaming list-scheduling heuristic restricted by
//! eligibility: each operation goes to the least-loaded eligible worker on
//! its equipment, ties resolved by roster order. It never backtracks.
//!
//! # Summary
//!
//! `AssignmentSummary` reports the total input time and the parallel
//! completion figure (largest worker load by default).
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod greedy;
mod grouping;
mod summary;

pub use greedy::{AssignmentOutcome, GreedyAssigner};
pub use grouping::{EquipmentGroup, EquipmentGroups, EquipmentIndex};
pub use summary::AssignmentSummary;
