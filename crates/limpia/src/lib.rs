//! Limpia: client-side cleaning and training workbench for tabular datasets.
//!
//! Limpia fronts a dataset-cleaning/model-training backend. It analyzes a
//! remote dataset, simulates cleaning operations on a local preview, and
//! only persists them when the user saves, at which point the backend's
//! fresh analysis replaces the simulation.
//!
//! # Core Principles
//!
//! - **Non-destructive**: the original analysis is never modified; the
//!   preview is a copy-on-write snapshot that can always be reset.
//! - **Append-ordered**: pending operations apply to the preview and
//!   persist to the backend in the order they were queued.
//! - **Backend-authoritative**: the local simulation is an optimistic
//!   preview; after a save the client re-fetches instead of trusting it.
//!
//! # Example
//!
//! ```no_run
//! use limpia::{
//!     BackendConfig, CleanOperation, HttpBackend, ImputeMethod, MemoryIdentityStore, Session,
//!     Studio,
//! };
//!
//! # fn main() -> limpia::Result<()> {
//! let backend = HttpBackend::new(BackendConfig::from_env())?;
//! let session = Session::obtain(&MemoryIdentityStore::new())?;
//! let mut studio = Studio::new(Box::new(backend), session);
//!
//! let datasets = studio.datasets()?;
//! let workbench = studio.open_dataset(datasets[0].id)?;
//! println!("{} filas", workbench.preview().total_rows);
//!
//! studio.apply(CleanOperation::Impute { method: ImputeMethod::Mean })?;
//! studio.apply(CleanOperation::Encode)?;
//! studio.save()?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod error;
pub mod gate;
pub mod pagination;
pub mod schema;
pub mod session;
pub mod snapshot;
pub mod transform;
pub mod upload;

mod studio;
mod workbench;

pub use backend::{
    Algorithm, AnalyzeResponse, Backend, BackendConfig, CleanRequest, CleanResponse,
    CleanedDatasetSummary, DatasetId, DatasetSummary, HealthStatus, HttpBackend, MockBackend,
    ModelStatus, ModelSummary, TrainRequest, TrainResponse, UploadResponse,
};
pub use error::{LimpiaError, Result};
pub use gate::{Action, ActionGate};
pub use pagination::{Pagination, ROWS_PER_PAGE};
pub use schema::{numeric_columns, CellValue, ColumnInfo, Row, RowStatus, NA_LABEL};
pub use session::{FileIdentityStore, IdentityStore, MemoryIdentityStore, Session};
pub use snapshot::{AnalysisSnapshot, SnapshotStore};
pub use studio::Studio;
pub use transform::{CleanOperation, ImputeMethod, OperationEngine, PendingOperation};
pub use upload::{validate_upload, UploadFile, MAX_UPLOAD_MB};
pub use workbench::{QualityStats, Workbench};
