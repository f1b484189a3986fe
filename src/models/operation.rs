//! Operation model.
//!
//! An operation is one row of the technological process table: a unit of
//! work bound to an equipment type, with a minimum worker grade and a
//! time cost in minutes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering key derived from the sequence-number column.
///
/// Present ordinals sort ascending; `Unordered` (missing or non-numeric)
/// sorts after every ordinal. Sorting with [`sort_by_sequence`] is stable,
/// so ties keep their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum SequenceKey {
    /// A finite parsed ordinal.
    Ordinal(f64),
    /// Missing or unparseable.
    Unordered,
}

impl SequenceKey {
    /// Parses a raw cell. Non-finite or non-numeric text is `Unordered`.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .map_or(Self::Unordered, Self::Ordinal)
    }

    /// Returns the ordinal, if present.
    pub fn ordinal(&self) -> Option<f64> {
        match self {
            Self::Ordinal(v) => Some(*v),
            Self::Unordered => None,
        }
    }

    /// Total order: ordinals ascending, then `Unordered`.
    pub fn ordering(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Ordinal(a), Self::Ordinal(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Ordinal(_), Self::Unordered) => Ordering::Less,
            (Self::Unordered, Self::Ordinal(_)) => Ordering::Greater,
            (Self::Unordered, Self::Unordered) => Ordering::Equal,
        }
    }
}

impl From<Option<f64>> for SequenceKey {
    fn from(value: Option<f64>) -> Self {
        value
            .filter(|v| v.is_finite())
            .map_or(Self::Unordered, Self::Ordinal)
    }
}

impl From<SequenceKey> for Option<f64> {
    fn from(key: SequenceKey) -> Self {
        key.ordinal()
    }
}

/// Stable sort by sequence key, unordered entries last.
pub fn sort_by_sequence<T>(items: &mut [T], key: impl Fn(&T) -> SequenceKey) {
    items.sort_by(|a, b| key(a).ordering(&key(b)));
}

/// A normalized operation record.
///
/// Produced by the record normalizer; all numeric fields are already
/// cleaned and defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Zero-based position of the source data row.
    pub row: usize,
    /// Ordering key.
    pub sequence: SequenceKey,
    /// Equipment identifier, verbatim from the table.
    pub equipment_id: Option<String>,
    /// Minimum worker grade.
    pub required_grade: u32,
    /// Time cost in minutes, non-negative, rounded to 2 decimals.
    pub time_cost: f64,
    /// Technological operation code.
    pub operation_code: Option<String>,
    /// Operation name.
    pub operation_name: Option<String>,
    /// Free-text technical conditions.
    pub technical_notes: Option<String>,
}

impl OperationRecord {
    /// Creates an unordered record with no descriptive fields.
    pub fn new(equipment_id: impl Into<String>, required_grade: u32, time_cost: f64) -> Self {
        Self {
            row: 0,
            sequence: SequenceKey::Unordered,
            equipment_id: Some(equipment_id.into()),
            required_grade,
            time_cost,
            operation_code: None,
            operation_name: None,
            technical_notes: None,
        }
    }

    /// Sets the source row position.
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    /// Sets the sequence ordinal.
    pub fn with_sequence(mut self, sequence: f64) -> Self {
        self.sequence = SequenceKey::from(Some(sequence));
        self
    }

    /// Sets the operation code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.operation_code = Some(code.into());
        self
    }

    /// Sets the operation name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Sets the technical notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.technical_notes = Some(notes.into());
        self
    }

    /// Whether this row is a synthetic worker-total row carried in from a
    /// previous result (its name contains `total_label`).
    pub fn is_total_row(&self, total_label: &str) -> bool {
        self.operation_name
            .as_deref()
            .is_some_and(|name| name.contains(total_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_parse() {
        assert_eq!(SequenceKey::parse(Some("3")), SequenceKey::Ordinal(3.0));
        assert_eq!(SequenceKey::parse(Some(" 2.5 ")), SequenceKey::Ordinal(2.5));
        assert_eq!(SequenceKey::parse(Some("-")), SequenceKey::Unordered);
        assert_eq!(SequenceKey::parse(Some("NaN")), SequenceKey::Unordered);
        assert_eq!(SequenceKey::parse(Some("inf")), SequenceKey::Unordered);
        assert_eq!(SequenceKey::parse(None), SequenceKey::Unordered);
    }

    #[test]
    fn test_sequence_ordering() {
        let one = SequenceKey::Ordinal(1.0);
        let two = SequenceKey::Ordinal(2.0);
        assert_eq!(one.ordering(&two), Ordering::Less);
        assert_eq!(two.ordering(&SequenceKey::Unordered), Ordering::Less);
        assert_eq!(SequenceKey::Unordered.ordering(&one), Ordering::Greater);
        assert_eq!(
            SequenceKey::Unordered.ordering(&SequenceKey::Unordered),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_is_stable_with_unordered_last() {
        let mut items = vec![
            ("a", SequenceKey::Unordered),
            ("b", SequenceKey::Ordinal(2.0)),
            ("c", SequenceKey::Ordinal(1.0)),
            ("d", SequenceKey::Unordered),
            ("e", SequenceKey::Ordinal(1.0)),
        ];
        sort_by_sequence(&mut items, |(_, k)| *k);
        let order: Vec<&str> = items.iter().map(|(n, _)| *n).collect();
        assert_eq!(order, vec!["c", "e", "b", "a", "d"]);
    }

    #[test]
    fn test_sequence_serde() {
        let json = serde_json::to_string(&SequenceKey::Ordinal(4.0)).unwrap();
        assert_eq!(json, "4.0");
        let json = serde_json::to_string(&SequenceKey::Unordered).unwrap();
        assert_eq!(json, "null");
        let key: SequenceKey = serde_json::from_str("null").unwrap();
        assert_eq!(key, SequenceKey::Unordered);
    }

    #[test]
    fn test_record_builder() {
        let op = OperationRecord::new("УМ", 3, 1.8)
            .with_row(4)
            .with_sequence(1.0)
            .with_code("Б 2.62.06")
            .with_name("З'єднати зрізи")
            .with_notes("Частота строчки 6-7ст/см");

        assert_eq!(op.row, 4);
        assert_eq!(op.sequence, SequenceKey::Ordinal(1.0));
        assert_eq!(op.equipment_id.as_deref(), Some("УМ"));
        assert_eq!(op.required_grade, 3);
        assert_eq!(op.operation_code.as_deref(), Some("Б 2.62.06"));
        assert!(!op.is_total_row("ВСЬОГО ДЛЯ РОБІТНИКА"));
    }

    #[test]
    fn test_total_row_detection() {
        let op = OperationRecord::new("УМ", 4, 21.15).with_name("ВСЬОГО ДЛЯ РОБІТНИКА");
        assert!(op.is_total_row("ВСЬОГО ДЛЯ РОБІТНИКА"));
        let unnamed = OperationRecord::new("УМ", 4, 1.0);
        assert!(!unnamed.is_total_row("ВСЬОГО ДЛЯ РОБІТНИКА"));
    }
}
