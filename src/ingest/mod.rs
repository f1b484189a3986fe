//! Input ingestion: decoding, CSV tokenization and record normalization.
//!
//! # Pipeline
//!
//! bytes → [`decode_with_fallback`] → [`RawTable::parse`] →
//! [`RecordNormalizer::normalize`] → `Vec<OperationRecord>`
//!
//! Cell-level problems are never errors; see [`cells`] for the cleaning
//! rules and [`normalizer`] for the defaults.

pub mod cells;
mod decode;
pub mod normalizer;
mod table;

pub use decode::{decode_utf8, decode_with_fallback};
pub use normalizer::RecordNormalizer;
pub use table::{cell, RawTable};

use crate::config::AssignConfig;
use crate::error::Result;
use crate::models::OperationRecord;

/// Reads operation records from a CSV byte stream (UTF-8 or windows-1251).
pub fn read_operations(bytes: &[u8], config: &AssignConfig) -> Result<Vec<OperationRecord>> {
    let text = decode_with_fallback(bytes)?;
    let table = RawTable::parse(&text)?;
    RecordNormalizer::new(config).normalize(&table)
}
