//! Backend contract and configuration.

use std::time::Duration;

use crate::error::Result;
use crate::session::Session;
use crate::upload::UploadFile;

use super::types::{
    AnalyzeResponse, CleanRequest, CleanResponse, CleanedDatasetSummary, DatasetId,
    DatasetSummary, HealthStatus, ModelSummary, TrainRequest, TrainResponse, UploadResponse,
};

/// Default backend base URL, matching the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "LIMPIA_API_URL";

/// Configuration for backend implementations.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, including the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl BackendConfig {
    /// Build a configuration, honoring the [`BASE_URL_ENV`] override.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().trim_end_matches('/').to_string();
            }
        }
        config
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Contract for the dashboard's backend service.
///
/// The backend owns all datasets and performs the authoritative cleaning
/// and training; the client only previews. Implementations must be
/// thread-safe (Send + Sync) so a backend can be shared across sessions.
pub trait Backend: Send + Sync {
    /// Upload a validated file. `POST /upload` (multipart).
    fn upload(&self, session: &Session, file: &UploadFile) -> Result<UploadResponse>;

    /// List the session's datasets. `GET /datasets/{user_id}`.
    fn datasets(&self, session: &Session) -> Result<Vec<DatasetSummary>>;

    /// Analyze a dataset. `POST /analyze`.
    fn analyze(&self, session: &Session, dataset_id: DatasetId) -> Result<AnalyzeResponse>;

    /// Column names of a cleaned dataset. `POST /analyze-cleaned`.
    fn cleaned_columns(&self, session: &Session, dataset_id: DatasetId) -> Result<Vec<String>>;

    /// Persist queued cleaning operations. `POST /clean`.
    fn clean(&self, session: &Session, request: &CleanRequest) -> Result<CleanResponse>;

    /// List the session's cleaned datasets. `GET /cleaned-datasets/{user_id}`.
    fn cleaned_datasets(&self, session: &Session) -> Result<Vec<CleanedDatasetSummary>>;

    /// Train a model on a cleaned dataset. `POST /train`.
    fn train(&self, session: &Session, request: &TrainRequest) -> Result<TrainResponse>;

    /// List the session's trained models. `GET /models/{user_id}`.
    fn models(&self, session: &Session) -> Result<Vec<ModelSummary>>;

    /// Probe service health. `GET /health` (beside the `/api` prefix).
    fn health(&self) -> Result<HealthStatus>;

    /// Name of this backend (for logging/debugging).
    fn name(&self) -> &str;
}

impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    fn upload(&self, session: &Session, file: &UploadFile) -> Result<UploadResponse> {
        (**self).upload(session, file)
    }

    fn datasets(&self, session: &Session) -> Result<Vec<DatasetSummary>> {
        (**self).datasets(session)
    }

    fn analyze(&self, session: &Session, dataset_id: DatasetId) -> Result<AnalyzeResponse> {
        (**self).analyze(session, dataset_id)
    }

    fn cleaned_columns(&self, session: &Session, dataset_id: DatasetId) -> Result<Vec<String>> {
        (**self).cleaned_columns(session, dataset_id)
    }

    fn clean(&self, session: &Session, request: &CleanRequest) -> Result<CleanResponse> {
        (**self).clean(session, request)
    }

    fn cleaned_datasets(&self, session: &Session) -> Result<Vec<CleanedDatasetSummary>> {
        (**self).cleaned_datasets(session)
    }

    fn train(&self, session: &Session, request: &TrainRequest) -> Result<TrainResponse> {
        (**self).train(session, request)
    }

    fn models(&self, session: &Session) -> Result<Vec<ModelSummary>> {
        (**self).models(session)
    }

    fn health(&self) -> Result<HealthStatus> {
        (**self).health()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = BackendConfig::default().with_base_url("https://api.example.com/api/");
        assert_eq!(config.base_url, "https://api.example.com/api");
    }
}
