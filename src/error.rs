//! Error taxonomy for the assignment and validation pipelines.
//!
//! Only structural problems are errors. Malformed individual cells
//! (non-numeric time, grade or sequence values) are defaulted during
//! normalization and never reach this type, and an operation with no
//! eligible worker is dropped rather than reported.
//!
//! | Variant | Fatal for | Cause |
//! |---------|-----------|-------|
//! | `Schema` | both pipelines | required column absent |
//! | `Decode` | fixed pipeline; assignment pipeline after fallback | bytes are not text |
//! | `RaggedRow` | both pipelines | row wider than the header |
//! | `Csv` | both pipelines | tokenizer failure |
//! | `Roster` | assignment pipeline | worker roster JSON invalid |
//! | `Config` | configuration loading | TOML invalid |

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AssignError>;

/// A fatal failure of a pipeline call.
#[derive(Debug, Error)]
pub enum AssignError {
    /// A required column is missing from the header row.
    #[error("CSV must contain '{column}' column")]
    Schema { column: String },

    /// The byte stream is not valid text under the attempted encoding.
    #[error("cannot decode input as {encoding}")]
    Decode { encoding: &'static str },

    /// A data row carries more fields than the header declares.
    #[error("row {line} has {found} fields, header declares {expected}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid worker roster: {0}")]
    Roster(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl AssignError {
    pub(crate) fn missing_column(column: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
        }
    }

    /// Name of the missing column, for schema failures.
    pub fn missing_column_name(&self) -> Option<&str> {
        match self {
            Self::Schema { column } => Some(column),
            _ => None,
        }
    }
}
