//! Wire types for the backend API.
//!
//! These mirror the JSON request/response shapes of each endpoint and are
//! kept separate from the client-side model types.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{LimpiaError, Result};
use crate::schema::{ColumnInfo, Row};
use crate::session::Session;
use crate::snapshot::AnalysisSnapshot;
use crate::transform::PendingOperation;

/// Backend-assigned dataset identifier.
pub type DatasetId = i64;

/// Response to a successful upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub rows: usize,
    pub columns: usize,
}

/// Descriptor of an uploaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: DatasetId,
    pub name: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub file_type: String,
    pub file_size_mb: f64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetList {
    pub datasets: Vec<DatasetSummary>,
}

/// Request body for the analyze endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub user_id: String,
    pub dataset_id: DatasetId,
}

/// Analysis of a dataset: shape, null distribution, and a row sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub dataset_id: DatasetId,
    pub total_rows: usize,
    pub total_columns: usize,
    pub columns_info: IndexMap<String, ColumnInfo>,
    pub total_nulls: usize,
    pub preview_data: Vec<Row>,
}

impl AnalyzeResponse {
    /// Convert the wire shape into the client-side snapshot. Row statuses
    /// are derived by the caller once the numeric-column set is known.
    pub fn into_snapshot(self) -> AnalysisSnapshot {
        AnalysisSnapshot {
            dataset_id: self.dataset_id,
            total_rows: self.total_rows,
            total_columns: self.total_columns,
            columns_info: self.columns_info,
            total_nulls: self.total_nulls,
            preview_rows: self.preview_data,
        }
    }
}

/// Column names of a cleaned dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedColumnsResponse {
    pub columns: Vec<String>,
}

/// Request body for the clean endpoint.
///
/// `operation` lists the queued operation types in append order and
/// `options` carries one parameter bag per operation, aligned by index.
/// Operations without parameters ship an empty bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRequest {
    pub user_id: String,
    pub dataset_id: DatasetId,
    pub operation: Vec<String>,
    pub options: Vec<Value>,
}

impl CleanRequest {
    /// Serialize a pending-operation queue, preserving append order.
    pub fn from_pending(
        session: &Session,
        dataset_id: DatasetId,
        pending: &[PendingOperation],
    ) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            dataset_id,
            operation: pending
                .iter()
                .map(|p| p.operation.kind().to_string())
                .collect(),
            options: pending.iter().map(|p| p.operation.options()).collect(),
        }
    }
}

/// Response to a successful clean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanResponse {
    pub operations_applied: Vec<String>,
}

/// Descriptor of a cleaned dataset ready for training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedDatasetSummary {
    pub id: DatasetId,
    pub name: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedDatasetList {
    pub datasets: Vec<CleanedDatasetSummary>,
}

/// Training algorithm catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    RandomForest,
    LinearRegression,
    LogisticRegression,
    Svm,
    NeuralNetwork,
    Cnn,
    Lstm,
}

impl Algorithm {
    /// Wire name, as the train endpoint expects it.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Algorithm::RandomForest => "random_forest",
            Algorithm::LinearRegression => "linear_regression",
            Algorithm::LogisticRegression => "logistic_regression",
            Algorithm::Svm => "svm",
            Algorithm::NeuralNetwork => "neural_network",
            Algorithm::Cnn => "cnn",
            Algorithm::Lstm => "lstm",
        }
    }

    /// Display name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::RandomForest => "Random Forest",
            Algorithm::LinearRegression => "Linear Regression",
            Algorithm::LogisticRegression => "Logistic Regression",
            Algorithm::Svm => "SVM",
            Algorithm::NeuralNetwork => "Neural Network (MLP)",
            Algorithm::Cnn => "CNN (Convolutional)",
            Algorithm::Lstm => "LSTM (Recurrent)",
        }
    }

    /// Whether the backend trains this algorithm with PyTorch rather than
    /// scikit-learn.
    pub fn uses_torch(&self) -> bool {
        matches!(
            self,
            Algorithm::NeuralNetwork | Algorithm::Cnn | Algorithm::Lstm
        )
    }

    /// Default hyperparameter bag per algorithm.
    pub fn default_hyperparameters(&self) -> Value {
        if self.uses_torch() {
            return json!({
                "epochs": 100,
                "batch_size": 32,
                "learning_rate": 0.001,
                "hidden_layers": [128, 64, 32],
                "dropout": 0.2,
            });
        }
        match self {
            Algorithm::RandomForest => json!({ "n_estimators": 100, "random_state": 42 }),
            Algorithm::LogisticRegression => json!({ "max_iter": 1000, "random_state": 42 }),
            _ => json!({}),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random_forest" | "rf" => Ok(Algorithm::RandomForest),
            "linear_regression" => Ok(Algorithm::LinearRegression),
            "logistic_regression" => Ok(Algorithm::LogisticRegression),
            "svm" => Ok(Algorithm::Svm),
            "neural_network" | "mlp" => Ok(Algorithm::NeuralNetwork),
            "cnn" => Ok(Algorithm::Cnn),
            "lstm" => Ok(Algorithm::Lstm),
            _ => Err(format!(
                "Unknown algorithm: {}. Use random_forest, linear_regression, \
                 logistic_regression, svm, neural_network, cnn, or lstm.",
                s
            )),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Request body for the train endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRequest {
    pub user_id: String,
    pub dataset_id: DatasetId,
    pub name: String,
    pub algorithm: Algorithm,
    pub target_variable: String,
    pub hyperparameters: Value,
    pub test_size: f64,
    pub random_state: i64,
}

impl TrainRequest {
    /// Build a request with the algorithm's default hyperparameters, a 0.2
    /// test split, and random state 42.
    pub fn new(
        session: &Session,
        dataset_id: DatasetId,
        name: impl Into<String>,
        algorithm: Algorithm,
        target_variable: impl Into<String>,
    ) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            dataset_id,
            name: name.into(),
            algorithm,
            target_variable: target_variable.into(),
            hyperparameters: algorithm.default_hyperparameters(),
            test_size: 0.2,
            random_state: 42,
        }
    }

    /// Set the held-out test fraction.
    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    /// Set the random seed.
    pub fn with_random_state(mut self, random_state: i64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Replace the hyperparameter bag.
    pub fn with_hyperparameters(mut self, hyperparameters: Value) -> Self {
        self.hyperparameters = hyperparameters;
        self
    }

    /// Reject incomplete requests before anything is sent.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LimpiaError::Validation("model name must not be empty".into()));
        }
        if self.target_variable.trim().is_empty() {
            return Err(LimpiaError::Validation(
                "target variable must not be empty".into(),
            ));
        }
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(LimpiaError::Validation(format!(
                "test size must be strictly between 0 and 1, got {}",
                self.test_size
            )));
        }
        Ok(())
    }
}

/// Metrics reported for a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Response to a successful training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    pub id: i64,
    pub name: String,
    pub metrics: ModelMetrics,
}

/// Lifecycle state of a trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Ready,
    Training,
}

impl ModelStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready)
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ModelStatus::Ready => "Listo",
            ModelStatus::Training => "Entrenando",
        }
    }
}

/// Descriptor of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: i64,
    pub name: String,
    pub algorithm: String,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub metrics: Value,
    pub trained_at: DateTime<Utc>,
    pub status: ModelStatus,
    pub training_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    pub models: Vec<ModelSummary>,
}

/// Service health probe result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{CleanOperation, ImputeMethod};

    #[test]
    fn test_clean_request_preserves_order_and_options() {
        let session = Session::with_user_id("u-1");
        let pending = vec![
            PendingOperation::new(CleanOperation::ReplaceNulls),
            PendingOperation::new(CleanOperation::Impute {
                method: ImputeMethod::Median,
            }),
            PendingOperation::new(CleanOperation::Encode),
        ];

        let request = CleanRequest::from_pending(&session, 7, &pending);
        assert_eq!(request.operation, vec!["replace_nulls", "impute", "encode"]);
        assert_eq!(request.options.len(), 3);
        assert_eq!(request.options[0], json!({}));
        assert_eq!(request.options[1], json!({"method": "median"}));
        assert_eq!(request.options[2], json!({}));
    }

    #[test]
    fn test_train_request_defaults() {
        let session = Session::with_user_id("u-1");
        let request = TrainRequest::new(&session, 3, "churn", Algorithm::RandomForest, "label");
        assert_eq!(request.test_size, 0.2);
        assert_eq!(request.random_state, 42);
        assert_eq!(
            request.hyperparameters,
            json!({"n_estimators": 100, "random_state": 42})
        );
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_train_request_validation() {
        let session = Session::with_user_id("u-1");
        let request = TrainRequest::new(&session, 3, "", Algorithm::Svm, "label");
        assert!(request.validate().is_err());

        let request = TrainRequest::new(&session, 3, "m", Algorithm::Svm, "label")
            .with_test_size(1.5);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_torch_algorithms_share_hyperparameters() {
        for algorithm in [Algorithm::NeuralNetwork, Algorithm::Cnn, Algorithm::Lstm] {
            assert!(algorithm.uses_torch());
            let params = algorithm.default_hyperparameters();
            assert_eq!(params["epochs"], 100);
            assert_eq!(params["hidden_layers"], json!([128, 64, 32]));
        }
        assert!(!Algorithm::Svm.uses_torch());
    }

    #[test]
    fn test_algorithm_wire_serialization() {
        assert_eq!(
            serde_json::to_string(&Algorithm::NeuralNetwork).unwrap(),
            "\"neural_network\""
        );
        assert_eq!("rf".parse::<Algorithm>().unwrap(), Algorithm::RandomForest);
    }
}
