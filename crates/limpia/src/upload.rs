//! Pre-request validation for dataset uploads.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LimpiaError, Result};

/// Upper bound for uploaded files, in megabytes.
pub const MAX_UPLOAD_MB: u64 = 50;

/// MIME types the backend accepts: CSV and the two Excel flavors.
const ALLOWED_MIME_TYPES: [&str; 3] = [
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// A local file that passed upload validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub size_bytes: u64,
}

/// Validate a file before any request is sent: CSV/Excel MIME types only,
/// at most [`MAX_UPLOAD_MB`] megabytes. Failures surface immediately; the
/// request is never sent.
pub fn validate_upload(path: impl AsRef<Path>) -> Result<UploadFile> {
    let path = path.as_ref();

    let mime = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    if !ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
        return Err(LimpiaError::UnsupportedFileType {
            path: path.to_path_buf(),
            mime,
        });
    }

    let metadata = fs::metadata(path).map_err(|e| LimpiaError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let size_bytes = metadata.len();
    if size_bytes > MAX_UPLOAD_MB * 1024 * 1024 {
        return Err(LimpiaError::FileTooLarge {
            path: path.to_path_buf(),
            size_mb: size_bytes as f64 / (1024.0 * 1024.0),
            limit_mb: MAX_UPLOAD_MB,
        });
    }

    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(UploadFile {
        path: path.to_path_buf(),
        file_name,
        mime,
        size_bytes,
    })
}
