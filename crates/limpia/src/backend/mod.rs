//! Backend API contract, HTTP implementation, and test mock.

mod http;
mod mock;
mod provider;
mod types;

pub use http::HttpBackend;
pub use mock::MockBackend;
pub use provider::{Backend, BackendConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use types::{
    Algorithm, AnalyzeRequest, AnalyzeResponse, CleanRequest, CleanResponse,
    CleanedColumnsResponse, CleanedDatasetList, CleanedDatasetSummary, DatasetId, DatasetList,
    DatasetSummary, HealthStatus, ModelList, ModelMetrics, ModelStatus, ModelSummary,
    TrainRequest, TrainResponse, UploadResponse,
};
