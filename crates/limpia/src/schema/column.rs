//! Per-column metadata and the numeric-column classifier.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Quality metadata for a single column, as reported by the analysis
/// endpoint and maintained locally by the operation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Backend dtype label (e.g. "int64", "float64", "object").
    pub dtype: String,
    /// Number of null values.
    pub nulls: usize,
    /// Null share in percent, in `[0, 100]`.
    pub null_percentage: f64,
    /// Whether the column is numeric. Fixed for the lifetime of a snapshot:
    /// computed once from the original analysis and reused for the preview,
    /// even after values change.
    pub is_numeric: bool,
}

impl ColumnInfo {
    /// Create column info with no nulls.
    pub fn new(dtype: impl Into<String>, is_numeric: bool) -> Self {
        Self {
            dtype: dtype.into(),
            nulls: 0,
            null_percentage: 0.0,
            is_numeric,
        }
    }

    /// Set the null count, deriving the percentage from the row count.
    pub fn with_nulls(mut self, nulls: usize, total_rows: usize) -> Self {
        self.nulls = nulls;
        self.null_percentage = if total_rows == 0 {
            0.0
        } else {
            nulls as f64 / total_rows as f64 * 100.0
        };
        self
    }

    /// Zero the null count and percentage after an operation removed them.
    pub fn clear_nulls(&mut self) {
        self.nulls = 0;
        self.null_percentage = 0.0;
    }
}

/// Collect the names of numeric columns from a fresh analysis.
///
/// Pure function; must be recomputed for every new snapshot rather than
/// reused across datasets. A column absent from the map is non-numeric.
pub fn numeric_columns(columns_info: &IndexMap<String, ColumnInfo>) -> IndexSet<String> {
    columns_info
        .iter()
        .filter(|(_, info)| info.is_numeric)
        .map(|(name, _)| name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_percentage_derivation() {
        let info = ColumnInfo::new("int64", true).with_nulls(3, 12);
        assert_eq!(info.nulls, 3);
        assert!((info.null_percentage - 25.0).abs() < 1e-9);

        let empty = ColumnInfo::new("int64", true).with_nulls(0, 0);
        assert_eq!(empty.null_percentage, 0.0);
    }

    #[test]
    fn test_numeric_column_classification() {
        let mut columns = IndexMap::new();
        columns.insert("age".to_string(), ColumnInfo::new("int64", true));
        columns.insert("name".to_string(), ColumnInfo::new("object", false));
        columns.insert("salary".to_string(), ColumnInfo::new("float64", true));

        let numeric = numeric_columns(&columns);
        assert!(numeric.contains("age"));
        assert!(numeric.contains("salary"));
        assert!(!numeric.contains("name"));
        assert!(!numeric.contains("missing_column"));
    }
}
