//! Tagged cell values.
//!
//! A cell is either a real value or one of two missing states: `Missing`
//! (the backend sent a null) and `Marked` (a missing value the replace-nulls
//! operation has already visited). `"N/A"` is only ever a display label; a
//! marked cell can never collide with a real text cell holding that string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Display label for marked missing values.
pub const NA_LABEL: &str = "N/A";

/// A single cell of a preview row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum CellValue {
    /// No value present (backend null).
    Missing,
    /// Missing value explicitly marked by the replace-nulls operation.
    Marked,
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Text value.
    Text(String),
}

impl CellValue {
    /// True for a backend null that no operation has touched yet.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// True for both missing states. Row status and encoding treat these
    /// the same way.
    pub fn is_null_like(&self) -> bool {
        matches!(self, CellValue::Missing | CellValue::Marked)
    }

    /// Numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Canonical string form used as a categorical encoding key.
    /// Null-like cells have no key.
    pub fn encode_key(&self) -> Option<String> {
        match self {
            CellValue::Missing | CellValue::Marked => None,
            CellValue::Number(n) => Some(number_key(*n)),
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    /// Human-readable form for tables and badges.
    pub fn display_label(&self) -> String {
        match self {
            CellValue::Missing => "NULL".to_string(),
            CellValue::Marked => NA_LABEL.to_string(),
            CellValue::Number(n) => number_key(*n),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// Canonical string form of a number: integral values drop the fraction.
pub(crate) fn number_key(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Missing,
            Value::Bool(b) => CellValue::Bool(b),
            Value::Number(n) => CellValue::Number(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => CellValue::Text(s),
            // Nested structures are not expected in preview rows; keep the
            // raw JSON text so nothing is silently dropped.
            other => CellValue::Text(other.to_string()),
        }
    }
}

impl From<CellValue> for Value {
    fn from(cell: CellValue) -> Self {
        match cell {
            CellValue::Missing => Value::Null,
            CellValue::Marked => Value::String(NA_LABEL.to_string()),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    Value::Number(serde_json::Number::from(n as i64))
                } else {
                    serde_json::Number::from_f64(n)
                        .map(Value::Number)
                        .unwrap_or(Value::Null)
                }
            }
            CellValue::Bool(b) => Value::Bool(b),
            CellValue::Text(s) => Value::String(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_deserializes_to_missing() {
        let cell: CellValue = serde_json::from_str("null").unwrap();
        assert_eq!(cell, CellValue::Missing);
    }

    #[test]
    fn test_scalar_round_trips() {
        let cell: CellValue = serde_json::from_str("42").unwrap();
        assert_eq!(cell, CellValue::Number(42.0));
        assert_eq!(serde_json::to_string(&cell).unwrap(), "42");

        let cell: CellValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(cell, CellValue::Text("red".to_string()));
    }

    #[test]
    fn test_marked_serializes_as_label_only() {
        assert_eq!(serde_json::to_string(&CellValue::Marked).unwrap(), "\"N/A\"");
        // A backend cell that really holds "N/A" stays text.
        let cell: CellValue = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(cell, CellValue::Text("N/A".to_string()));
        assert!(!cell.is_null_like());
    }

    #[test]
    fn test_null_likeness() {
        assert!(CellValue::Missing.is_null_like());
        assert!(CellValue::Marked.is_null_like());
        assert!(!CellValue::Number(0.0).is_null_like());
        assert!(!CellValue::Text(String::new()).is_null_like());
    }

    #[test]
    fn test_encode_keys() {
        assert_eq!(CellValue::Number(5.0).encode_key().as_deref(), Some("5"));
        assert_eq!(CellValue::Number(5.5).encode_key().as_deref(), Some("5.5"));
        assert_eq!(
            CellValue::Text("blue".to_string()).encode_key().as_deref(),
            Some("blue")
        );
        assert_eq!(CellValue::Missing.encode_key(), None);
        assert_eq!(CellValue::Marked.encode_key(), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(CellValue::Missing.display_label(), "NULL");
        assert_eq!(CellValue::Marked.display_label(), "N/A");
        assert_eq!(CellValue::Number(3.25).display_label(), "3.25");
    }
}
