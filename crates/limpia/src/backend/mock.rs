//! Mock backend that returns predictable responses for testing.

use std::sync::Mutex;

use chrono::Utc;
use serde_json::json;

use crate::error::{LimpiaError, Result};
use crate::session::Session;
use crate::upload::UploadFile;

use super::provider::Backend;
use super::types::{
    AnalyzeResponse, CleanRequest, CleanResponse, CleanedDatasetSummary, DatasetId,
    DatasetSummary, HealthStatus, ModelMetrics, ModelStatus, ModelSummary, TrainRequest,
    TrainResponse, UploadResponse,
};

/// Accuracy reported for every mock training run.
const MOCK_ACCURACY: f64 = 0.9;

struct MockDataset {
    summary: DatasetSummary,
    /// Analysis returned before the dataset has been cleaned.
    raw: AnalyzeResponse,
    /// Analysis returned once a clean request succeeded.
    cleaned: AnalyzeResponse,
    is_cleaned: bool,
}

#[derive(Default)]
struct MockState {
    datasets: Vec<MockDataset>,
    clean_requests: Vec<CleanRequest>,
    train_requests: Vec<TrainRequest>,
    models: Vec<ModelSummary>,
    /// When set, analyze responses echo this id instead of the requested
    /// one, simulating a response for a stale selection.
    stale_echo: Option<DatasetId>,
}

/// Deterministic in-memory backend for tests and examples.
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    /// Create an empty mock backend.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
        }
    }

    /// Register a dataset with its pre- and post-clean analyses.
    pub fn with_dataset(
        self,
        summary: DatasetSummary,
        raw: AnalyzeResponse,
        cleaned: AnalyzeResponse,
    ) -> Self {
        self.state.lock().unwrap().datasets.push(MockDataset {
            summary,
            raw,
            cleaned,
            is_cleaned: false,
        });
        self
    }

    /// Make every analyze response echo the given dataset id, regardless of
    /// the one requested.
    pub fn echo_wrong_dataset(self, dataset_id: DatasetId) -> Self {
        self.state.lock().unwrap().stale_echo = Some(dataset_id);
        self
    }

    /// Clean requests received so far, in arrival order.
    pub fn clean_requests(&self) -> Vec<CleanRequest> {
        self.state.lock().unwrap().clean_requests.clone()
    }

    /// Train requests received so far, in arrival order.
    pub fn train_requests(&self) -> Vec<TrainRequest> {
        self.state.lock().unwrap().train_requests.clone()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MockBackend {
    fn upload(&self, _session: &Session, file: &UploadFile) -> Result<UploadResponse> {
        Ok(UploadResponse {
            file_name: file.file_name.clone(),
            rows: 100,
            columns: 8,
        })
    }

    fn datasets(&self, _session: &Session) -> Result<Vec<DatasetSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state.datasets.iter().map(|d| d.summary.clone()).collect())
    }

    fn analyze(&self, _session: &Session, dataset_id: DatasetId) -> Result<AnalyzeResponse> {
        let state = self.state.lock().unwrap();
        let dataset = state
            .datasets
            .iter()
            .find(|d| d.summary.id == dataset_id)
            .ok_or_else(|| LimpiaError::Http {
                status: 404,
                detail: format!("dataset {} not found", dataset_id),
            })?;

        let mut response = if dataset.is_cleaned {
            dataset.cleaned.clone()
        } else {
            dataset.raw.clone()
        };
        if let Some(echo) = state.stale_echo {
            response.dataset_id = echo;
        }
        Ok(response)
    }

    fn cleaned_columns(&self, _session: &Session, dataset_id: DatasetId) -> Result<Vec<String>> {
        let state = self.state.lock().unwrap();
        let dataset = state
            .datasets
            .iter()
            .find(|d| d.summary.id == dataset_id)
            .ok_or_else(|| LimpiaError::Http {
                status: 404,
                detail: format!("dataset {} not found", dataset_id),
            })?;
        Ok(dataset.cleaned.columns_info.keys().cloned().collect())
    }

    fn clean(&self, _session: &Session, request: &CleanRequest) -> Result<CleanResponse> {
        let mut state = self.state.lock().unwrap();
        let dataset_id = request.dataset_id;
        state.clean_requests.push(request.clone());

        let dataset = state
            .datasets
            .iter_mut()
            .find(|d| d.summary.id == dataset_id)
            .ok_or_else(|| LimpiaError::Http {
                status: 404,
                detail: format!("dataset {} not found", dataset_id),
            })?;
        dataset.is_cleaned = true;

        Ok(CleanResponse {
            operations_applied: request.operation.clone(),
        })
    }

    fn cleaned_datasets(&self, _session: &Session) -> Result<Vec<CleanedDatasetSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .datasets
            .iter()
            .filter(|d| d.is_cleaned)
            .map(|d| CleanedDatasetSummary {
                id: d.summary.id,
                name: format!("{}_cleaned", d.summary.name),
                num_rows: d.summary.num_rows,
                num_columns: d.summary.num_columns,
                created_at: Utc::now(),
                file_path: None,
            })
            .collect())
    }

    fn train(&self, _session: &Session, request: &TrainRequest) -> Result<TrainResponse> {
        let mut state = self.state.lock().unwrap();
        state.train_requests.push(request.clone());

        let id = state.models.len() as i64 + 1;
        state.models.push(ModelSummary {
            id,
            name: request.name.clone(),
            algorithm: request.algorithm.wire_name().to_string(),
            accuracy: MOCK_ACCURACY,
            metrics: json!({ "accuracy": MOCK_ACCURACY }),
            trained_at: Utc::now(),
            status: ModelStatus::Ready,
            training_time: 1.0,
        });

        Ok(TrainResponse {
            id,
            name: request.name.clone(),
            metrics: ModelMetrics {
                accuracy: MOCK_ACCURACY,
                extra: Default::default(),
            },
        })
    }

    fn models(&self, _session: &Session) -> Result<Vec<ModelSummary>> {
        Ok(self.state.lock().unwrap().models.clone())
    }

    fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
