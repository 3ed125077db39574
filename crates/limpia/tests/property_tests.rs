//! Property-based tests for the operation engine.
//!
//! These tests generate random previews and operation sequences and verify
//! that the engine maintains its invariants under all conditions:
//!
//! 1. **No panics**: operations never crash, whatever the input
//! 2. **Shape preservation**: row and column counts never change
//! 3. **Determinism**: the same input always produces the same preview
//! 4. **Status consistency**: every row status matches the deriver
//! 5. **Reset**: the preview always returns to the original

use indexmap::IndexMap;
use proptest::prelude::*;

use limpia::{
    AnalyzeResponse, CellValue, CleanOperation, ColumnInfo, ImputeMethod, Row, Workbench,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn numeric_cell() -> BoxedStrategy<CellValue> {
    prop_oneof![
        3 => (-1000.0..1000.0f64).prop_map(CellValue::Number),
        1 => Just(CellValue::Missing),
    ]
    .boxed()
}

fn categorical_cell() -> BoxedStrategy<CellValue> {
    prop_oneof![
        3 => "[a-z]{1,6}".prop_map(CellValue::Text),
        1 => Just(CellValue::Missing),
    ]
    .boxed()
}

fn operation() -> BoxedStrategy<CleanOperation> {
    prop_oneof![
        Just(CleanOperation::ReplaceNulls),
        Just(CleanOperation::Impute {
            method: ImputeMethod::Mean
        }),
        Just(CleanOperation::Impute {
            method: ImputeMethod::Median
        }),
        Just(CleanOperation::Impute {
            method: ImputeMethod::Mode
        }),
        Just(CleanOperation::Normalize),
        Just(CleanOperation::Encode),
    ]
    .boxed()
}

/// Build a wire response from generated cells: 1-3 numeric and 1-2
/// categorical columns, 0-20 rows.
fn analysis() -> BoxedStrategy<AnalyzeResponse> {
    (1usize..=3, 1usize..=2, 0usize..=20)
        .prop_flat_map(|(numeric_count, categorical_count, row_count)| {
            let row = (
                prop::collection::vec(numeric_cell(), numeric_count),
                prop::collection::vec(categorical_cell(), categorical_count),
            );
            prop::collection::vec(row, row_count).prop_map(move |rows| {
                build_response(numeric_count, categorical_count, rows)
            })
        })
        .boxed()
}

fn build_response(
    numeric_count: usize,
    categorical_count: usize,
    rows: Vec<(Vec<CellValue>, Vec<CellValue>)>,
) -> AnalyzeResponse {
    let numeric_names: Vec<String> = (0..numeric_count).map(|i| format!("num_{}", i)).collect();
    let categorical_names: Vec<String> =
        (0..categorical_count).map(|i| format!("cat_{}", i)).collect();

    let preview_data: Vec<Row> = rows
        .iter()
        .map(|(numeric, categorical)| {
            let mut cells = IndexMap::new();
            for (name, value) in numeric_names.iter().zip(numeric) {
                cells.insert(name.clone(), value.clone());
            }
            for (name, value) in categorical_names.iter().zip(categorical) {
                cells.insert(name.clone(), value.clone());
            }
            Row::from_cells(cells)
        })
        .collect();

    let mut columns_info = IndexMap::new();
    let mut total_nulls = 0;
    for name in numeric_names.iter().chain(categorical_names.iter()) {
        let nulls = preview_data
            .iter()
            .filter(|row| row.get(name).map(CellValue::is_missing).unwrap_or(false))
            .count();
        total_nulls += nulls;
        let is_numeric = name.starts_with("num_");
        let dtype = if is_numeric { "float64" } else { "object" };
        columns_info.insert(
            name.clone(),
            ColumnInfo::new(dtype, is_numeric).with_nulls(nulls, preview_data.len()),
        );
    }

    AnalyzeResponse {
        dataset_id: 1,
        total_rows: preview_data.len(),
        total_columns: columns_info.len(),
        columns_info,
        total_nulls,
        preview_data,
    }
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn operations_preserve_shape(
        response in analysis(),
        operations in prop::collection::vec(operation(), 0..6),
    ) {
        let mut workbench = Workbench::from_analysis(response);
        let rows = workbench.original().preview_rows.len();
        let columns = workbench.original().columns_info.len();

        for op in operations {
            workbench.apply(op);
        }

        prop_assert_eq!(workbench.preview().preview_rows.len(), rows);
        prop_assert_eq!(workbench.preview().columns_info.len(), columns);
    }

    #[test]
    fn replace_nulls_leaves_no_missing_cells(response in analysis()) {
        let mut workbench = Workbench::from_analysis(response);
        workbench.apply(CleanOperation::ReplaceNulls);

        for row in &workbench.preview().preview_rows {
            for value in row.cells.values() {
                prop_assert!(!value.is_missing());
            }
        }
        prop_assert_eq!(workbench.preview().total_nulls, 0);
    }

    #[test]
    fn replace_nulls_is_idempotent(response in analysis()) {
        let mut workbench = Workbench::from_analysis(response);
        workbench.apply(CleanOperation::ReplaceNulls);
        let first = workbench.preview().clone();
        workbench.apply(CleanOperation::ReplaceNulls);
        prop_assert_eq!(workbench.preview(), &first);
    }

    #[test]
    fn impute_fills_every_numeric_null(
        response in analysis(),
        method in prop_oneof![
            Just(ImputeMethod::Mean),
            Just(ImputeMethod::Median),
            Just(ImputeMethod::Mode),
        ],
    ) {
        let mut workbench = Workbench::from_analysis(response);
        workbench.apply(CleanOperation::Impute { method });

        let preview = workbench.preview();
        for (name, info) in &preview.columns_info {
            if info.is_numeric {
                prop_assert_eq!(info.nulls, 0);
                for row in &preview.preview_rows {
                    if let Some(value) = row.get(name) {
                        prop_assert!(!value.is_missing());
                    }
                }
            }
        }
        prop_assert!(preview.nulls_consistent());
    }

    #[test]
    fn encode_turns_every_categorical_cell_into_a_code(response in analysis()) {
        let mut workbench = Workbench::from_analysis(response);
        workbench.apply(CleanOperation::Encode);

        let preview = workbench.preview();
        for (name, info) in &preview.columns_info {
            if info.is_numeric {
                continue;
            }
            let distinct = preview
                .preview_rows
                .iter()
                .filter_map(|row| row.get(name))
                .filter_map(|value| value.encode_key())
                .collect::<std::collections::HashSet<_>>()
                .len();
            for row in &preview.preview_rows {
                if let Some(value) = row.get(name) {
                    let code = value.as_number();
                    prop_assert!(code.is_some());
                    let code = code.unwrap();
                    prop_assert!(code >= 0.0);
                    prop_assert!((code as usize) < distinct.max(1));
                }
            }
        }
    }

    #[test]
    fn statuses_always_match_the_deriver(
        response in analysis(),
        operations in prop::collection::vec(operation(), 0..5),
    ) {
        let mut workbench = Workbench::from_analysis(response);
        for op in operations {
            workbench.apply(op);
        }

        let numeric = workbench.numeric_columns().clone();
        for row in &workbench.preview().preview_rows {
            prop_assert_eq!(row.status, row.derive_status(&numeric));
        }
    }

    #[test]
    fn reset_always_restores_the_original(
        response in analysis(),
        operations in prop::collection::vec(operation(), 1..6),
    ) {
        let mut workbench = Workbench::from_analysis(response);
        for op in operations {
            workbench.apply(op);
        }
        workbench.reset();

        prop_assert_eq!(workbench.preview(), workbench.original());
        prop_assert!(workbench.pending().is_empty());
    }

    #[test]
    fn engine_is_deterministic(
        response in analysis(),
        operations in prop::collection::vec(operation(), 0..5),
    ) {
        let mut left = Workbench::from_analysis(response.clone());
        let mut right = Workbench::from_analysis(response);
        for op in &operations {
            left.apply(op.clone());
            right.apply(op.clone());
        }
        prop_assert_eq!(left.preview(), right.preview());
    }
}
