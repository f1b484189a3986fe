//! Shop-floor operation assignment for the U-Engine ecosystem.
//!
//! Distributes technological operations, each bound to an equipment type
//! and a minimum grade, across a roster of workers, balancing total
//! assigned time with a single-pass greedy heuristic.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `OperationRecord`, `SequenceKey`, `Worker`,
//!   `OutputRow`, `Record`
//! - **`ingest`**: Decoding (UTF-8 with windows-1251 fallback), CSV parsing,
//!   lenient cell normalization
//! - **`scheduler`**: Equipment grouping, `GreedyAssigner`, `AssignmentSummary`
//! - **`report`**: Per-worker result table and BOM-prefixed CSV export
//! - **`pipeline`**: `process_operations`, the end-to-end entry point
//! - **`validation`**: Fixed-operations filtering and deduplication
//! - **`config`**: Column names, labels and policy constants
//! - **`error`**: `AssignError`
//!
//! # Architecture
//!
//! Every call builds its own state and returns it; there is no global or
//! cached state, so calls may run concurrently without synchronization.
//! Logging goes through `tracing`; installing a subscriber is up to the
//! caller.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use config::AssignConfig;
pub use error::{AssignError, Result};
pub use pipeline::{process_operations, process_operations_json, AssignmentResult};
pub use validation::{process_fixed_operations, FixedOperationsReport};
