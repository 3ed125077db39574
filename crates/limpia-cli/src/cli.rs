//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use limpia::{Algorithm, DatasetId, ImputeMethod};

/// Limpia: cleaning and training workbench for tabular datasets
#[derive(Parser)]
#[command(name = "limpia")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (default: LIMPIA_API_URL or http://localhost:8000/api)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to the persisted identity file (default: ~/.limpia/identity)
    #[arg(long, global = true, value_name = "FILE")]
    pub identity_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a CSV or Excel dataset
    Upload {
        /// Path to the file to upload
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List uploaded datasets
    Datasets {
        /// List cleaned datasets instead
        #[arg(long)]
        cleaned: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze a dataset, preview cleaning operations, and optionally save them
    ///
    /// Operations are queued in a fixed order: replace-nulls, impute,
    /// normalize, encode. Without --save the preview is local only.
    Clean {
        /// Dataset to analyze
        #[arg(value_name = "DATASET_ID")]
        dataset: DatasetId,

        /// Replace every null with the N/A placeholder
        #[arg(long)]
        replace_nulls: bool,

        /// Impute numeric nulls with a statistic (mean, median, or mode)
        #[arg(long, value_name = "METHOD")]
        impute: Option<ImputeMethod>,

        /// Standard-score numeric columns
        #[arg(long)]
        normalize: bool,

        /// Integer-encode categorical columns
        #[arg(long)]
        encode: bool,

        /// Preview page to print
        #[arg(long, default_value = "1")]
        page: usize,

        /// Persist the queued operations to the backend
        #[arg(long)]
        save: bool,
    },

    /// Train a model on a cleaned dataset
    Train {
        /// Cleaned dataset to train on
        #[arg(value_name = "DATASET_ID")]
        dataset: DatasetId,

        /// Model name
        #[arg(short, long)]
        name: Option<String>,

        /// Algorithm (random_forest, linear_regression, logistic_regression,
        /// svm, neural_network, cnn, lstm)
        #[arg(short, long, default_value = "random_forest")]
        algorithm: Algorithm,

        /// Target variable column
        #[arg(short, long)]
        target: Option<String>,

        /// Held-out test fraction
        #[arg(long, default_value = "0.2")]
        test_size: f64,

        /// Random seed forwarded to the backend
        #[arg(long, default_value = "42")]
        random_state: i64,

        /// List the dataset's columns and exit
        #[arg(long)]
        list_columns: bool,
    },

    /// List trained models
    Models {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check backend service health
    Status,

    /// Show or reset the persisted client identity
    Identity {
        /// Delete the stored identifier; a fresh one is generated next run
        #[arg(long)]
        reset: bool,
    },
}
