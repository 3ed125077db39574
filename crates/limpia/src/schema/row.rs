//! Preview rows and the derived row status.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// Derived per-row quality label. Synthetic: added by the client, never
/// persisted to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    /// All numeric columns are populated.
    #[default]
    Active,
    /// At least one numeric column is missing.
    Inactive,
}

impl RowStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Active => "Activo",
            RowStatus::Inactive => "Inactivo",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RowStatus::Active)
    }
}

/// A single preview row: an ordered map of column name to cell value, plus
/// the derived status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    /// Cell values keyed by column name, in column order.
    #[serde(flatten)]
    pub cells: IndexMap<String, CellValue>,
    /// Derived status; excluded from serialization (backend rows never
    /// carry it) and refreshed after ingestion and after every operation.
    #[serde(skip)]
    pub status: RowStatus,
}

impl Row {
    /// Create a row from its cells. The status starts at the default and
    /// must be derived once the numeric-column set is known.
    pub fn from_cells(cells: IndexMap<String, CellValue>) -> Self {
        Self {
            cells,
            status: RowStatus::default(),
        }
    }

    /// Get a cell by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Set a cell value.
    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// Compute the status for this row: inactive if and only if at least one
    /// numeric column is absent or holds a null-like value.
    pub fn derive_status(&self, numeric: &IndexSet<String>) -> RowStatus {
        for column in numeric {
            let null_like = self
                .cells
                .get(column)
                .map(CellValue::is_null_like)
                .unwrap_or(true);
            if null_like {
                return RowStatus::Inactive;
            }
        }
        RowStatus::Active
    }

    /// Recompute and store the status. Must run after every operation that
    /// can change nullness of numeric columns.
    pub fn refresh_status(&mut self, numeric: &IndexSet<String>) {
        self.status = self.derive_status(numeric);
    }
}
