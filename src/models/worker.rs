//! Worker model.
//!
//! A worker operates exactly one equipment type and may perform any
//! operation on it whose required grade does not exceed the worker's own.
//! Workers are supplied wholesale per call and never mutated.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::OperationRecord;
use crate::error::Result;

/// Opaque worker identifier: integer or free text, as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkerId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for WorkerId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for WorkerId {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<&str> for WorkerId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for WorkerId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A worker on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Identifier, echoed into every output row.
    pub id: WorkerId,
    /// Skill grade.
    #[serde(deserialize_with = "deserialize_grade")]
    pub grade: u32,
    /// Declared equipment, free text.
    pub equipment: String,
}

impl Worker {
    /// Creates a worker.
    pub fn new(id: impl Into<WorkerId>, grade: u32, equipment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            grade,
            equipment: equipment.into(),
        }
    }

    /// Case- and whitespace-insensitive equipment key.
    pub fn equipment_key(&self) -> String {
        equipment_key(&self.equipment)
    }

    /// Whether the worker's grade covers the operation's requirement.
    #[inline]
    pub fn meets_grade(&self, operation: &OperationRecord) -> bool {
        self.grade >= operation.required_grade
    }
}

/// Folds an equipment string into its lookup key (trimmed, lowercase).
pub fn equipment_key(equipment: &str) -> String {
    equipment.trim().to_lowercase()
}

/// Parses a worker roster from JSON.
///
/// Expects an array of `{"id": .., "grade": .., "equipment": ..}` objects.
/// Ids may be integers or strings; grades may be integers or numeric strings.
pub fn roster_from_json(json: &str) -> Result<Vec<Worker>> {
    Ok(serde_json::from_str(json)?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GradeInput {
    Integer(u64),
    Decimal(f64),
    Text(String),
}

fn deserialize_grade<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = match GradeInput::deserialize(deserializer)? {
        GradeInput::Integer(n) => n as f64,
        GradeInput::Decimal(v) => v,
        GradeInput::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("invalid worker grade '{s}'")))?,
    };

    if !value.is_finite() || value < 0.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!("invalid worker grade {value}")));
    }
    Ok(value.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssignError;

    #[test]
    fn test_worker_builder() {
        let w = Worker::new(1, 4, " UM ");
        assert_eq!(w.id, WorkerId::Number(1));
        assert_eq!(w.grade, 4);
        assert_eq!(w.equipment_key(), "um");
    }

    #[test]
    fn test_equipment_key_folds_unicode() {
        assert_eq!(equipment_key("  Оверлок "), "оверлок");
        assert_eq!(equipment_key("Закріпочна НА"), "закріпочна на");
    }

    #[test]
    fn test_meets_grade() {
        let w = Worker::new(1, 3, "UM");
        assert!(w.meets_grade(&OperationRecord::new("UM", 3, 1.0)));
        assert!(w.meets_grade(&OperationRecord::new("UM", 0, 1.0)));
        assert!(!w.meets_grade(&OperationRecord::new("UM", 4, 1.0)));
    }

    #[test]
    fn test_worker_id_display() {
        assert_eq!(WorkerId::from(7).to_string(), "7");
        assert_eq!(WorkerId::from("w-7").to_string(), "w-7");
    }

    #[test]
    fn test_roster_from_json_mixed_types() {
        let roster = roster_from_json(
            r#"[
                {"id": 1, "grade": "4", "equipment": "УМ"},
                {"id": "night-2", "grade": 3, "equipment": "оверлок "},
                {"id": 3, "grade": 5.0, "equipment": "ВТО"}
            ]"#,
        )
        .unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].grade, 4);
        assert_eq!(roster[1].id, WorkerId::Text("night-2".into()));
        assert_eq!(roster[1].grade, 3);
        assert_eq!(roster[2].grade, 5);
    }

    #[test]
    fn test_roster_rejects_bad_grade() {
        let err = roster_from_json(r#"[{"id": 1, "grade": "", "equipment": "УМ"}]"#).unwrap_err();
        assert!(matches!(err, AssignError::Roster(_)));

        let err = roster_from_json(r#"[{"id": 1, "grade": -2, "equipment": "УМ"}]"#).unwrap_err();
        assert!(matches!(err, AssignError::Roster(_)));
    }

    #[test]
    fn test_worker_serializes_id_untagged() {
        let json = serde_json::to_string(&Worker::new(2, 3, "УМ")).unwrap();
        assert_eq!(json, r#"{"id":2,"grade":3,"equipment":"УМ"}"#);
    }
}
