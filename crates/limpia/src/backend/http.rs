//! HTTP backend implementation.

use reqwest::blocking::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{LimpiaError, Result};
use crate::session::Session;
use crate::upload::UploadFile;

use super::provider::{Backend, BackendConfig};
use super::types::{
    AnalyzeRequest, AnalyzeResponse, CleanRequest, CleanResponse, CleanedColumnsResponse,
    CleanedDatasetList, CleanedDatasetSummary, DatasetId, DatasetList, DatasetSummary,
    HealthStatus, ModelList, ModelSummary, TrainRequest, TrainResponse, UploadResponse,
};

/// Error body shape used by the backend for non-success responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Backend implementation over the real HTTP API.
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Create a backend with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LimpiaError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create a backend from the environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(BackendConfig::from_env())
    }

    /// The active configuration.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// The health endpoint lives beside the `/api` prefix, not under it.
    fn health_url(&self) -> String {
        format!(
            "{}/health",
            self.config.base_url.trim_end_matches("/api")
        )
    }

    /// Convert a response into the expected body. Non-2xx responses are
    /// parsed for a `detail` message, falling back to a generic message
    /// with the numeric status code.
    fn handle<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| format!("Error {}", status.as_u16()));
            return Err(LimpiaError::Http {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json()?)
    }
}

impl Backend for HttpBackend {
    fn upload(&self, session: &Session, file: &UploadFile) -> Result<UploadResponse> {
        let form = multipart::Form::new()
            .text("user_id", session.user_id().to_string())
            .file("file", &file.path)
            .map_err(|e| LimpiaError::Io {
                path: file.path.clone(),
                source: e,
            })?;

        let response = self
            .client
            .post(self.url("/upload"))
            .multipart(form)
            .send()?;
        Self::handle(response)
    }

    fn datasets(&self, session: &Session) -> Result<Vec<DatasetSummary>> {
        let response = self
            .client
            .get(self.url(&format!("/datasets/{}", session.user_id())))
            .send()?;
        let list: DatasetList = Self::handle(response)?;
        Ok(list.datasets)
    }

    fn analyze(&self, session: &Session, dataset_id: DatasetId) -> Result<AnalyzeResponse> {
        let response = self
            .client
            .post(self.url("/analyze"))
            .json(&AnalyzeRequest {
                user_id: session.user_id().to_string(),
                dataset_id,
            })
            .send()?;
        Self::handle(response)
    }

    fn cleaned_columns(&self, session: &Session, dataset_id: DatasetId) -> Result<Vec<String>> {
        let response = self
            .client
            .post(self.url("/analyze-cleaned"))
            .json(&AnalyzeRequest {
                user_id: session.user_id().to_string(),
                dataset_id,
            })
            .send()?;
        let body: CleanedColumnsResponse = Self::handle(response)?;
        Ok(body.columns)
    }

    fn clean(&self, session: &Session, request: &CleanRequest) -> Result<CleanResponse> {
        debug_assert_eq!(session.user_id(), request.user_id);
        let response = self.client.post(self.url("/clean")).json(request).send()?;
        Self::handle(response)
    }

    fn cleaned_datasets(&self, session: &Session) -> Result<Vec<CleanedDatasetSummary>> {
        let response = self
            .client
            .get(self.url(&format!("/cleaned-datasets/{}", session.user_id())))
            .send()?;
        let list: CleanedDatasetList = Self::handle(response)?;
        Ok(list.datasets)
    }

    fn train(&self, session: &Session, request: &TrainRequest) -> Result<TrainResponse> {
        debug_assert_eq!(session.user_id(), request.user_id);
        let response = self.client.post(self.url("/train")).json(request).send()?;
        Self::handle(response)
    }

    fn models(&self, session: &Session) -> Result<Vec<ModelSummary>> {
        let response = self
            .client
            .get(self.url(&format!("/models/{}", session.user_id())))
            .send()?;
        let list: ModelList = Self::handle(response)?;
        Ok(list.models)
    }

    fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.health_url()).send()?;
        Self::handle(response)
    }

    fn name(&self) -> &str {
        "http"
    }
}
