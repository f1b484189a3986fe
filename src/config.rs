//! Pipeline configuration and policy constants.
//!
//! Column headers default to the production spreadsheet layout. Policies
//! that are deliberate but questionable (the malformed-grade default, the
//! fate of operations without an eligible worker, the meaning of the
//! parallel-completion figure) are named here so they can be flipped
//! without touching the normalization or assignment code.
//!
//! # Example
//!
//! ```
//! use u_assign::config::{AssignConfig, ParallelTimeMode};
//!
//! let config = AssignConfig::from_toml_str(r#"
//!     parallel_time = "sum_of_loads"
//!
//!     [columns]
//!     grade = "Grade"
//! "#).unwrap();
//! assert_eq!(config.columns.grade, "Grade");
//! assert_eq!(config.parallel_time, ParallelTimeMode::SumOfLoads);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Grade assigned to an operation whose grade cell is missing or malformed.
///
/// An operation defaulted to grade 0 is assignable to any worker on its
/// equipment.
pub const MALFORMED_GRADE_DEFAULT: u32 = 0;

/// Default label of the synthetic per-worker total row.
pub const DEFAULT_TOTAL_LABEL: &str = "ВСЬОГО ДЛЯ РОБІТНИКА";

/// Default non-numeric placeholder written into total rows.
pub const DEFAULT_PLACEHOLDER: &str = "-";

/// What happens to an operation no worker is eligible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignablePolicy {
    /// Drop silently: the operation appears nowhere in the result.
    #[default]
    Drop,
    /// Drop from the table and totals, but list it in the result bundle.
    Collect,
}

/// Interpretation of the aggregate parallel-completion figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelTimeMode {
    /// Largest single worker load (makespan).
    #[default]
    MaxLoad,
    /// Sum of all worker loads.
    SumOfLoads,
}

/// Header names of the input and output tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Ordinal used for stable ordering.
    pub sequence: String,
    /// Equipment identifier.
    pub equipment: String,
    /// Required grade (input) / worker grade (output). Required.
    pub grade: String,
    /// Technological operation code.
    pub operation_code: String,
    /// Operation name.
    pub operation_name: String,
    /// Time cost in minutes. Required.
    pub time_cost: String,
    /// Free-text technical notes.
    pub technical_notes: String,
    /// Worker identifier (output only).
    pub worker: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            sequence: "№ п/п".into(),
            equipment: "Обладнання".into(),
            grade: "Розряд".into(),
            operation_code: "№ тех.оп.".into(),
            operation_name: "Назва технологічної операції".into(),
            time_cost: "Затрати часу, хв".into(),
            technical_notes: "Технічні умови".into(),
            worker: "Робітник".into(),
        }
    }
}

/// Configuration shared by the assignment and validation pipelines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignConfig {
    /// Table header names.
    pub columns: ColumnNames,
    /// Operation name of synthetic total rows.
    pub total_label: String,
    /// Non-numeric marker for the sequence and code cells of total rows.
    pub placeholder: String,
    /// Grade used when a grade cell is missing, malformed or negative.
    pub malformed_grade_default: u32,
    /// Handling of operations without an eligible worker.
    pub unassignable: UnassignablePolicy,
    /// Meaning of `max_parallel_time`.
    pub parallel_time: ParallelTimeMode,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            total_label: DEFAULT_TOTAL_LABEL.into(),
            placeholder: DEFAULT_PLACEHOLDER.into(),
            malformed_grade_default: MALFORMED_GRADE_DEFAULT,
            unassignable: UnassignablePolicy::default(),
            parallel_time: ParallelTimeMode::default(),
        }
    }
}

impl AssignConfig {
    /// Parses a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Sets the unassignable-operation policy.
    pub fn with_unassignable(mut self, policy: UnassignablePolicy) -> Self {
        self.unassignable = policy;
        self
    }

    /// Sets the parallel-completion interpretation.
    pub fn with_parallel_time(mut self, mode: ParallelTimeMode) -> Self {
        self.parallel_time = mode;
        self
    }

    /// Sets the header names.
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }
}
