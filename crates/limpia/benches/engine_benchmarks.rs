//! Benchmarks for the operation engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indexmap::IndexMap;

use limpia::{
    numeric_columns, AnalysisSnapshot, CellValue, CleanOperation, ColumnInfo, ImputeMethod,
    OperationEngine, Row,
};

/// Build a snapshot with `rows` preview rows: two numeric columns with
/// interleaved nulls and one categorical column cycling a small vocabulary.
fn snapshot(rows: usize) -> AnalysisSnapshot {
    let vocabulary = ["red", "blue", "green", "yellow"];
    let preview_rows: Vec<Row> = (0..rows)
        .map(|i| {
            let mut cells = IndexMap::new();
            cells.insert(
                "age".to_string(),
                if i % 7 == 0 {
                    CellValue::Missing
                } else {
                    CellValue::Number((20 + i % 50) as f64)
                },
            );
            cells.insert(
                "salary".to_string(),
                CellValue::Number(1000.0 + (i % 13) as f64 * 250.0),
            );
            cells.insert(
                "color".to_string(),
                CellValue::Text(vocabulary[i % vocabulary.len()].to_string()),
            );
            Row::from_cells(cells)
        })
        .collect();

    let age_nulls = preview_rows
        .iter()
        .filter(|row| row.get("age").map(CellValue::is_missing).unwrap_or(false))
        .count();

    let mut columns_info = IndexMap::new();
    columns_info.insert(
        "age".to_string(),
        ColumnInfo::new("int64", true).with_nulls(age_nulls, rows),
    );
    columns_info.insert("salary".to_string(), ColumnInfo::new("float64", true));
    columns_info.insert("color".to_string(), ColumnInfo::new("object", false));

    AnalysisSnapshot {
        dataset_id: 1,
        total_rows: rows,
        total_columns: columns_info.len(),
        columns_info,
        total_nulls: age_nulls,
        preview_rows,
    }
}

fn bench_operations(c: &mut Criterion) {
    let engine = OperationEngine::new();
    let base = snapshot(1000);
    let numeric = numeric_columns(&base.columns_info);

    let mut group = c.benchmark_group("engine");
    group.bench_function("replace_nulls_1k", |b| {
        b.iter(|| {
            black_box(engine.apply(&base, &CleanOperation::ReplaceNulls, &numeric));
        })
    });
    group.bench_function("impute_mean_1k", |b| {
        b.iter(|| {
            black_box(engine.apply(
                &base,
                &CleanOperation::Impute {
                    method: ImputeMethod::Mean,
                },
                &numeric,
            ));
        })
    });
    group.bench_function("normalize_1k", |b| {
        b.iter(|| {
            black_box(engine.apply(&base, &CleanOperation::Normalize, &numeric));
        })
    });
    group.bench_function("encode_1k", |b| {
        b.iter(|| {
            black_box(engine.apply(&base, &CleanOperation::Encode, &numeric));
        })
    });
    group.finish();
}

criterion_group!(benches, bench_operations);
criterion_main!(benches);
