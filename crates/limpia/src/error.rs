//! Error types for the Limpia library.

use std::path::PathBuf;
use thiserror::Error;

use crate::backend::DatasetId;
use crate::gate::Action;

/// Main error type for Limpia operations.
#[derive(Debug, Error)]
pub enum LimpiaError {
    /// Error reading or accessing a local file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backend returned a non-success status.
    #[error("backend error ({status}): {detail}")]
    Http { status: u16, detail: String },

    /// Transport-level failure before a response was received.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File rejected before upload: unsupported MIME type.
    #[error("unsupported file type for '{path}': {mime} (only CSV and Excel files are accepted)")]
    UnsupportedFileType { path: PathBuf, mime: String },

    /// File rejected before upload: exceeds the size limit.
    #[error("file '{path}' is {size_mb:.2} MB, above the {limit_mb} MB upload limit")]
    FileTooLarge {
        path: PathBuf,
        size_mb: f64,
        limit_mb: u64,
    },

    /// A request of the same kind is already in flight.
    #[error("a {0} request is already in flight")]
    Busy(Action),

    /// An analysis response echoed a dataset other than the one requested.
    #[error("stale analysis response: requested dataset {requested}, received {received}")]
    StaleAnalysis {
        requested: DatasetId,
        received: DatasetId,
    },

    /// Save was requested with no pending operations.
    #[error("no pending operations to save")]
    EmptyQueue,

    /// Input rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for Limpia operations.
pub type Result<T> = std::result::Result<T, LimpiaError>;
