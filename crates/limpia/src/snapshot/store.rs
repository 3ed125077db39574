//! Original/preview snapshot pair with copy-on-write reset.

use std::sync::Arc;

use super::analysis::AnalysisSnapshot;

/// Owns the immutable original analysis and the working preview.
///
/// Both sides share one allocation until the first operation produces a new
/// preview, so resetting is a pointer swap rather than a deep copy. The
/// original is never mutated.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    original: Arc<AnalysisSnapshot>,
    preview: Arc<AnalysisSnapshot>,
}

impl SnapshotStore {
    /// Capture a fresh analysis as both original and preview.
    pub fn new(snapshot: AnalysisSnapshot) -> Self {
        let original = Arc::new(snapshot);
        let preview = Arc::clone(&original);
        Self { original, preview }
    }

    /// The immutable original analysis.
    pub fn original(&self) -> &AnalysisSnapshot {
        &self.original
    }

    /// The current working preview.
    pub fn preview(&self) -> &AnalysisSnapshot {
        &self.preview
    }

    /// Install the next preview produced by the operation engine.
    pub fn replace_preview(&mut self, next: AnalysisSnapshot) {
        self.preview = Arc::new(next);
    }

    /// Discard the preview and restore it to the original.
    pub fn reset(&mut self) {
        self.preview = Arc::clone(&self.original);
    }

    /// Whether the preview still equals the original.
    pub fn is_pristine(&self) -> bool {
        Arc::ptr_eq(&self.original, &self.preview) || *self.original == *self.preview
    }
}
