//! The analysis snapshot: shape, null distribution, and a row sample.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::backend::DatasetId;
use crate::schema::{ColumnInfo, Row};

/// The result of analyzing a dataset at a point in time.
///
/// One instance is kept immutable as the "original"; an independently
/// mutable copy serves as the working preview. The operation engine is
/// responsible for keeping `total_nulls` and the per-column counts
/// consistent after local transformations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// Dataset this snapshot describes.
    pub dataset_id: DatasetId,
    /// Total rows in the dataset (not just the preview sample).
    pub total_rows: usize,
    /// Total columns in the dataset; may exceed the `columns_info` entry
    /// count when the backend withholds some columns.
    pub total_columns: usize,
    /// Per-column metadata, in column order.
    pub columns_info: IndexMap<String, ColumnInfo>,
    /// Total null count across all columns.
    pub total_nulls: usize,
    /// Sampled rows for preview and local simulation.
    pub preview_rows: Vec<Row>,
}

impl AnalysisSnapshot {
    /// Check that `total_nulls` equals the sum of per-column null counts.
    /// Holds at ingestion time (backend/client agreement) and is maintained
    /// by the operation engine afterwards.
    pub fn nulls_consistent(&self) -> bool {
        let sum: usize = self.columns_info.values().map(|info| info.nulls).sum();
        sum == self.total_nulls
    }

    /// Column names in column order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns_info.keys().map(|name| name.as_str())
    }

    /// Recompute the status of every preview row.
    pub fn refresh_statuses(&mut self, numeric: &IndexSet<String>) {
        for row in &mut self.preview_rows {
            row.refresh_status(numeric);
        }
    }
}
