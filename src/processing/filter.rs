//! Row filtering for [`crate::types::DataSet`].

use crate::error::{FilterError, FilterResult};
use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Keep rows whose `column` value is `<= threshold`.
///
/// Null values never satisfy the comparison, so those rows are dropped. Every non-null value is
/// checked before any row is kept; a non-numeric one fails the whole call.
pub fn filter_at_or_below(
    dataset: &DataSet,
    column: &str,
    threshold: f64,
) -> FilterResult<DataSet> {
    let idx = dataset
        .schema
        .index_of(column)
        .ok_or_else(|| FilterError::MissingColumn {
            column: column.to_owned(),
            headers: dataset.schema.field_names().map(str::to_owned).collect(),
        })?;

    for (row_idx0, row) in dataset.rows.iter().enumerate() {
        match row.get(idx) {
            None | Some(Value::Null) | Some(Value::Int64(_)) | Some(Value::Float64(_)) => {}
            Some(other) => {
                return Err(FilterError::NotComparable {
                    // Same numbering as load errors: header is row 1.
                    row: row_idx0 + 2,
                    column: column.to_owned(),
                    value: other.to_string(),
                    threshold,
                });
            }
        }
    }

    Ok(filter(dataset, |row| match row.get(idx) {
        Some(Value::Int64(v)) => int_at_or_below(*v, threshold),
        Some(Value::Float64(v)) => *v <= threshold,
        _ => false,
    }))
}

/// `v <= threshold` without rounding `v` through `f64`.
///
/// For an integer, `v <= t` holds exactly when `v <= floor(t)`.
fn int_at_or_below(v: i64, threshold: f64) -> bool {
    let floor = threshold.floor();
    if floor.is_nan() || floor < i64::MIN as f64 {
        return false;
    }
    // Saturates to i64::MAX for thresholds past the i64 range.
    v <= floor as i64
}
