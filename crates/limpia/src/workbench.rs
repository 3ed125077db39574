//! Per-dataset cleaning workbench.
//!
//! A workbench is created from a fresh analysis and holds everything the
//! cleaning screen needs: the fixed numeric-column set, the original/preview
//! snapshot pair, the pending-operation queue, and the pagination window.

use indexmap::IndexSet;

use crate::backend::{AnalyzeResponse, CleanRequest, DatasetId};
use crate::error::{LimpiaError, Result};
use crate::pagination::Pagination;
use crate::schema::{numeric_columns, Row};
use crate::session::Session;
use crate::snapshot::{AnalysisSnapshot, SnapshotStore};
use crate::transform::{CleanOperation, OperationEngine, PendingOperation};

/// Headline quality numbers for the current preview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityStats {
    pub total_records: usize,
    pub total_nulls: usize,
    /// Share of non-null cells, in percent, rounded to one decimal.
    pub quality_percent: f64,
}

/// Working state for one analyzed dataset.
#[derive(Debug)]
pub struct Workbench {
    dataset_id: DatasetId,
    /// Numeric columns, classified once from the original analysis and
    /// reused for the preview even after values change.
    numeric: IndexSet<String>,
    store: SnapshotStore,
    pending: Vec<PendingOperation>,
    pagination: Pagination,
    engine: OperationEngine,
}

impl Workbench {
    /// Ingest a fresh analysis: classify numeric columns, derive row
    /// statuses, and capture the snapshot as both original and preview.
    pub fn from_analysis(response: AnalyzeResponse) -> Self {
        let numeric = numeric_columns(&response.columns_info);
        let mut snapshot = response.into_snapshot();
        snapshot.refresh_statuses(&numeric);

        Self {
            dataset_id: snapshot.dataset_id,
            numeric,
            store: SnapshotStore::new(snapshot),
            pending: Vec::new(),
            pagination: Pagination::default(),
            engine: OperationEngine::new(),
        }
    }

    /// The dataset this workbench operates on.
    pub fn dataset_id(&self) -> DatasetId {
        self.dataset_id
    }

    /// The fixed numeric-column set.
    pub fn numeric_columns(&self) -> &IndexSet<String> {
        &self.numeric
    }

    /// The immutable original analysis.
    pub fn original(&self) -> &AnalysisSnapshot {
        self.store.original()
    }

    /// The current preview.
    pub fn preview(&self) -> &AnalysisSnapshot {
        self.store.preview()
    }

    /// The pending-operation queue, in append order.
    pub fn pending(&self) -> &[PendingOperation] {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Column names for display. The synthetic status column is appended
    /// when the dataset does not already carry one.
    pub fn column_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.preview().columns_info.keys().cloned().collect();
        if !names.iter().any(|name| name == "status") {
            names.push("status".to_string());
        }
        names
    }

    /// Apply an operation to the preview and append it to the queue. The
    /// original snapshot is never touched.
    pub fn apply(&mut self, operation: CleanOperation) {
        let next = self
            .engine
            .apply(self.store.preview(), &operation, &self.numeric);
        self.store.replace_preview(next);
        self.pending.push(PendingOperation::new(operation));
    }

    /// Discard the preview and the queue, restoring the original.
    pub fn reset(&mut self) {
        self.store.reset();
        self.pending.clear();
    }

    /// Headline quality numbers for the preview.
    pub fn quality(&self) -> QualityStats {
        let preview = self.store.preview();
        let total_cells = preview.total_rows * preview.total_columns;
        let quality_percent = if total_cells == 0 {
            100.0
        } else {
            let ratio = (total_cells - preview.total_nulls.min(total_cells)) as f64
                / total_cells as f64;
            (ratio * 1000.0).round() / 10.0
        };
        QualityStats {
            total_records: preview.total_rows,
            total_nulls: preview.total_nulls,
            quality_percent,
        }
    }

    /// The current page (1-indexed).
    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    /// Number of preview pages.
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.preview().preview_rows.len())
    }

    /// Select a preview page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        let total = self.store.preview().preview_rows.len();
        self.pagination.set_page(page, total);
    }

    /// Rows visible on the current page.
    pub fn current_rows(&self) -> &[Row] {
        self.pagination.slice(&self.store.preview().preview_rows)
    }

    /// Serialize the queue for the clean endpoint.
    pub fn clean_request(&self, session: &Session) -> Result<CleanRequest> {
        if self.pending.is_empty() {
            return Err(LimpiaError::EmptyQueue);
        }
        Ok(CleanRequest::from_pending(
            session,
            self.dataset_id,
            &self.pending,
        ))
    }
}
