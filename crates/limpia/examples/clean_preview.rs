//! End-to-end cleaning workflow against the mock backend.
//!
//! Run with: cargo run -p limpia --example clean_preview

use chrono::Utc;
use limpia::{
    CleanOperation, DatasetSummary, ImputeMethod, MemoryIdentityStore, MockBackend, Session,
    Studio,
};
use serde_json::json;

fn main() -> limpia::Result<()> {
    let raw = serde_json::from_value(json!({
        "dataset_id": 1,
        "total_rows": 4,
        "total_columns": 2,
        "columns_info": {
            "age":   {"dtype": "int64",  "nulls": 1, "null_percentage": 25.0, "is_numeric": true},
            "color": {"dtype": "object", "nulls": 0, "null_percentage": 0.0,  "is_numeric": false}
        },
        "total_nulls": 1,
        "preview_data": [
            {"age": 22,   "color": "red"},
            {"age": null, "color": "blue"},
            {"age": 31,   "color": "red"},
            {"age": 27,   "color": "green"}
        ]
    }))?;
    let cleaned = serde_json::from_value(json!({
        "dataset_id": 1,
        "total_rows": 4,
        "total_columns": 2,
        "columns_info": {
            "age":   {"dtype": "int64", "nulls": 0, "null_percentage": 0.0, "is_numeric": true},
            "color": {"dtype": "int64", "nulls": 0, "null_percentage": 0.0, "is_numeric": true}
        },
        "total_nulls": 0,
        "preview_data": [
            {"age": 22, "color": 0},
            {"age": 27, "color": 1},
            {"age": 31, "color": 0},
            {"age": 27, "color": 2}
        ]
    }))?;

    let summary = DatasetSummary {
        id: 1,
        name: "ventas".to_string(),
        num_rows: 4,
        num_columns: 2,
        file_type: "csv".to_string(),
        file_size_mb: 0.1,
        uploaded_at: Utc::now(),
    };

    let backend = MockBackend::new().with_dataset(summary, raw, cleaned);
    let session = Session::obtain(&MemoryIdentityStore::new())?;
    let mut studio = Studio::new(Box::new(backend), session);

    studio.open_dataset(1)?;
    studio.apply(CleanOperation::Impute {
        method: ImputeMethod::Mean,
    })?;
    studio.apply(CleanOperation::Encode)?;

    {
        let workbench = studio.workbench().expect("workbench open");
        println!("Pending operations:");
        for pending in workbench.pending() {
            println!("  - {}", pending.label);
        }
        let stats = workbench.quality();
        println!(
            "Preview quality: {}% ({} nulls over {} records)",
            stats.quality_percent, stats.total_nulls, stats.total_records
        );
    }

    let outcome = studio.save()?;
    println!("Saved; backend applied {:?}", outcome.operations_applied);

    let workbench = studio.workbench().expect("workbench open");
    println!(
        "Fresh analysis: {} nulls, queue empty = {}",
        workbench.preview().total_nulls,
        workbench.pending().is_empty()
    );

    Ok(())
}
