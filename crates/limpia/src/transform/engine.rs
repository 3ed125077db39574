//! Operation engine: applies cleaning operations to the preview snapshot.
//!
//! Every application is a functional update: the engine borrows the current
//! preview and produces the next one, leaving the original untouched so the
//! reset path stays correct. Operations never fail on malformed input; a
//! column with no eligible values or an empty row set is a no-op for that
//! column.

use indexmap::{IndexMap, IndexSet};

use crate::schema::{number_key, CellValue, Row};
use crate::snapshot::AnalysisSnapshot;

use super::operations::{CleanOperation, ImputeMethod};

/// Engine that applies cleaning operations to preview snapshots.
#[derive(Debug, Default)]
pub struct OperationEngine;

impl OperationEngine {
    /// Create a new operation engine.
    pub fn new() -> Self {
        Self
    }

    /// Apply one operation, producing the next preview. Row statuses are
    /// refreshed before the snapshot is returned.
    pub fn apply(
        &self,
        snapshot: &AnalysisSnapshot,
        operation: &CleanOperation,
        numeric: &IndexSet<String>,
    ) -> AnalysisSnapshot {
        let mut next = snapshot.clone();
        match operation {
            CleanOperation::ReplaceNulls => self.apply_replace_nulls(&mut next),
            CleanOperation::Impute { method } => self.apply_impute(&mut next, *method),
            CleanOperation::Normalize => self.apply_normalize(&mut next),
            CleanOperation::Encode => self.apply_encode(&mut next),
        }
        next.refresh_statuses(numeric);
        next
    }

    /// Mark every missing cell, in every column, and zero all null counts.
    fn apply_replace_nulls(&self, snapshot: &mut AnalysisSnapshot) {
        for row in &mut snapshot.preview_rows {
            for value in row.cells.values_mut() {
                if value.is_missing() {
                    *value = CellValue::Marked;
                }
            }
        }
        for info in snapshot.columns_info.values_mut() {
            info.clear_nulls();
        }
        snapshot.total_nulls = 0;
    }

    /// Fill missing numeric cells with a per-column statistic computed over
    /// the current non-null numeric values. Marked cells are not filled;
    /// they were already claimed by replace-nulls.
    fn apply_impute(&self, snapshot: &mut AnalysisSnapshot, method: ImputeMethod) {
        // All statistics come from the values as they are before any fill.
        let mut fills: IndexMap<String, f64> = IndexMap::new();
        for (name, info) in &snapshot.columns_info {
            if info.is_numeric {
                let values = column_numbers(&snapshot.preview_rows, name);
                fills.insert(name.clone(), imputed_value(&values, method));
            }
        }

        for row in &mut snapshot.preview_rows {
            for (column, fill) in &fills {
                if let Some(value) = row.cells.get_mut(column) {
                    if value.is_missing() {
                        *value = CellValue::Number(*fill);
                    }
                }
            }
        }

        for info in snapshot.columns_info.values_mut() {
            if info.is_numeric {
                info.clear_nulls();
            }
        }
        // Non-numeric columns keep their nulls.
        snapshot.total_nulls = snapshot
            .columns_info
            .values()
            .filter(|info| !info.is_numeric)
            .map(|info| info.nulls)
            .sum();
    }

    /// Standard-score every numeric value, rounded to two decimals. A zero
    /// standard deviation is treated as one.
    fn apply_normalize(&self, snapshot: &mut AnalysisSnapshot) {
        let mut scales: IndexMap<String, (f64, f64)> = IndexMap::new();
        for (name, info) in &snapshot.columns_info {
            if !info.is_numeric {
                continue;
            }
            let values = column_numbers(&snapshot.preview_rows, name);
            if values.is_empty() {
                continue;
            }
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            let variance =
                values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
            let std = variance.sqrt();
            scales.insert(name.clone(), (mean, if std == 0.0 { 1.0 } else { std }));
        }

        for row in &mut snapshot.preview_rows {
            for (column, (mean, std)) in &scales {
                if let Some(value) = row.cells.get_mut(column) {
                    if let Some(v) = value.as_number() {
                        *value = CellValue::Number(round2((v - mean) / std));
                    }
                }
            }
        }
    }

    /// Assign each distinct non-null value of every categorical column an
    /// integer code in first-seen row order; null-like and unseen values
    /// map to 0.
    fn apply_encode(&self, snapshot: &mut AnalysisSnapshot) {
        let categorical: Vec<String> = snapshot
            .columns_info
            .iter()
            .filter(|(_, info)| !info.is_numeric)
            .map(|(name, _)| name.clone())
            .collect();

        for column in &categorical {
            let mut codes: IndexMap<String, i64> = IndexMap::new();
            for row in &snapshot.preview_rows {
                if let Some(key) = row.cells.get(column).and_then(|cell| cell.encode_key()) {
                    let next = codes.len() as i64;
                    codes.entry(key).or_insert(next);
                }
            }

            for row in &mut snapshot.preview_rows {
                if let Some(value) = row.cells.get_mut(column) {
                    let code = value
                        .encode_key()
                        .and_then(|key| codes.get(&key).copied())
                        .unwrap_or(0);
                    *value = CellValue::Number(code as f64);
                }
            }
        }
    }
}

/// Non-null numeric values of one column, in row order.
fn column_numbers(rows: &[Row], column: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|row| row.cells.get(column))
        .filter_map(CellValue::as_number)
        .collect()
}

/// Compute the fill statistic for a column. Zero eligible values yield 0.
pub(crate) fn imputed_value(values: &[f64], method: ImputeMethod) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    match method {
        ImputeMethod::Mean => round_half_up(values.iter().sum::<f64>() / values.len() as f64),
        ImputeMethod::Median => {
            let mut sorted = values.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                round_half_up((sorted[mid - 1] + sorted[mid]) / 2.0)
            } else {
                sorted[mid]
            }
        }
        ImputeMethod::Mode => {
            let mut counts: IndexMap<String, (f64, usize)> = IndexMap::new();
            for &v in values {
                let entry = counts.entry(number_key(v)).or_insert((v, 0));
                entry.1 += 1;
            }
            // Highest frequency wins; ties go to the smallest value.
            let mut best: Option<(f64, usize)> = None;
            for &(value, count) in counts.values() {
                best = match best {
                    None => Some((value, count)),
                    Some((bv, bc)) if count > bc || (count == bc && value < bv) => {
                        Some((value, count))
                    }
                    other => other,
                };
            }
            best.map(|(value, _)| value).unwrap_or(0.0)
        }
    }
}

/// Round half-intervals toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to two decimals, half-intervals toward positive infinity.
fn round2(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rounds_to_nearest_integer() {
        assert_eq!(imputed_value(&[10.0, 30.0], ImputeMethod::Mean), 20.0);
        assert_eq!(
            imputed_value(&[10.0, 20.0, 30.0, 41.0], ImputeMethod::Mean),
            25.0
        );
        // Half-intervals round up.
        assert_eq!(imputed_value(&[1.0, 2.0], ImputeMethod::Mean), 2.0);
    }

    #[test]
    fn test_median_even_count_rounds_average() {
        assert_eq!(
            imputed_value(&[1.0, 2.0, 3.0, 4.0], ImputeMethod::Median),
            3.0
        );
    }

    #[test]
    fn test_median_odd_count_is_middle_element() {
        assert_eq!(
            imputed_value(&[9.0, 1.0, 5.0], ImputeMethod::Median),
            5.0
        );
    }

    #[test]
    fn test_mode_prefers_highest_frequency() {
        assert_eq!(
            imputed_value(&[3.0, 7.0, 7.0, 3.0, 7.0], ImputeMethod::Mode),
            7.0
        );
    }

    #[test]
    fn test_mode_tie_breaks_to_smallest() {
        assert_eq!(imputed_value(&[7.0, 3.0, 7.0, 3.0], ImputeMethod::Mode), 3.0);
    }

    #[test]
    fn test_empty_column_statistic_is_zero() {
        assert_eq!(imputed_value(&[], ImputeMethod::Mean), 0.0);
        assert_eq!(imputed_value(&[], ImputeMethod::Median), 0.0);
        assert_eq!(imputed_value(&[], ImputeMethod::Mode), 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(0.125), 0.13);
        // Half-intervals round toward positive infinity.
        assert_eq!(round2(-0.125), -0.12);
    }
}
