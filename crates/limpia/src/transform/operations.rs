//! Cleaning operations and the pending-operation queue entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Statistic used to fill missing numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImputeMethod {
    /// Arithmetic mean, rounded to the nearest integer.
    Mean,
    /// Middle element; even counts use the rounded average of the two
    /// middle elements.
    Median,
    /// Most frequent value; ties broken by the smallest value.
    Mode,
}

impl FromStr for ImputeMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(ImputeMethod::Mean),
            "median" => Ok(ImputeMethod::Median),
            "mode" => Ok(ImputeMethod::Mode),
            _ => Err(format!("Unknown impute method: {}. Use mean, median, or mode.", s)),
        }
    }
}

impl fmt::Display for ImputeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImputeMethod::Mean => write!(f, "mean"),
            ImputeMethod::Median => write!(f, "median"),
            ImputeMethod::Mode => write!(f, "mode"),
        }
    }
}

/// A cleaning operation applied to the preview snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CleanOperation {
    /// Replace every null value with the N/A placeholder.
    ReplaceNulls,
    /// Fill missing numeric values with a per-column statistic.
    Impute { method: ImputeMethod },
    /// Standard-score numeric columns, rounded to two decimals.
    Normalize,
    /// Integer-encode categorical columns in first-seen order.
    Encode,
}

impl CleanOperation {
    /// Wire name of the operation, as the clean endpoint expects it.
    pub fn kind(&self) -> &'static str {
        match self {
            CleanOperation::ReplaceNulls => "replace_nulls",
            CleanOperation::Impute { .. } => "impute",
            CleanOperation::Normalize => "normalize",
            CleanOperation::Encode => "encode",
        }
    }

    /// Human-readable label shown in the pending queue.
    pub fn label(&self) -> String {
        match self {
            CleanOperation::ReplaceNulls => "Reemplazar NULL con N/A".to_string(),
            CleanOperation::Impute { method } => format!("Imputar con {}", method),
            CleanOperation::Normalize => "Normalizar con StandardScaler".to_string(),
            CleanOperation::Encode => "Codificar variables categóricas".to_string(),
        }
    }

    /// Parameter bag forwarded to the backend. Operations without
    /// parameters ship an empty object.
    pub fn options(&self) -> Value {
        match self {
            CleanOperation::Impute { method } => json!({ "method": method }),
            _ => json!({}),
        }
    }
}

/// A queued, not-yet-persisted operation with its label captured at the
/// time the user triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    pub operation: CleanOperation,
    pub label: String,
}

impl PendingOperation {
    /// Queue an operation, capturing its label.
    pub fn new(operation: CleanOperation) -> Self {
        let label = operation.label();
        Self { operation, label }
    }
}
