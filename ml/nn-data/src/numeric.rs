//! Numeric validation of raw feature/label rows.
//!
//! Raw rows arrive as [`serde_json::Value`]s. A JSON array is one row; a
//! bare scalar is a row of width one. A sequence is either all arrays or
//! all scalars. Every element must coerce to `f64` and every row in a
//! sequence must share the width of the first row.

use ndarray::Array2;
use serde_json::Value;

use crate::error::{DatasetError, Result};

/// Validated feature and label matrices.
pub type Validated = (Array2<f64>, Array2<f64>);

/// Coerces a single element to `f64`.
///
/// Numbers pass through, booleans become `1.0`/`0.0`, and strings are
/// parsed after trimming. Everything else is not numeric.
///
/// # Example
///
/// ```
/// use nn_data::coerce_value;
/// use serde_json::json;
///
/// assert_eq!(coerce_value(&json!(3)), Some(3.0));
/// assert_eq!(coerce_value(&json!(" 1.5 ")), Some(1.5));
/// assert_eq!(coerce_value(&json!(true)), Some(1.0));
/// assert_eq!(coerce_value(&json!("Cat")), None);
/// assert_eq!(coerce_value(&json!(null)), None);
/// ```
#[must_use]
pub fn coerce_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Coerces one raw row, reporting the first failing column.
fn coerce_row(row_idx: usize, row: &Value) -> Result<Vec<f64>> {
    match row {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(column, item)| {
                coerce_value(item)
                    .ok_or_else(|| DatasetError::non_numeric(row_idx, column, item.to_string()))
            })
            .collect(),
        scalar => coerce_value(scalar)
            .map(|v| vec![v])
            .ok_or_else(|| DatasetError::non_numeric(row_idx, 0, scalar.to_string())),
    }
}

/// Coerces a sequence of raw rows into a fixed-width matrix.
///
/// # Errors
///
/// Returns [`DatasetError::NonNumeric`] for an element that is not a
/// number or for a row whose shape (array or scalar) differs from the
/// first row, and [`DatasetError::RaggedRow`] when a row width differs
/// from the first row.
pub fn coerce_rows(rows: &[Value]) -> Result<Array2<f64>> {
    if let Some(first) = rows.first() {
        if let Some((idx, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.is_array() != first.is_array())
        {
            return Err(DatasetError::non_numeric(idx, 0, row.to_string()));
        }
    }

    let coerced = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| coerce_row(idx, row))
        .collect::<Result<Vec<_>>>()?;
    stack_rows(coerced)
}

/// Packs equal-width rows into a row-major matrix.
fn stack_rows(rows: Vec<Vec<f64>>) -> Result<Array2<f64>> {
    let n_rows = rows.len();
    let width = rows.first().map_or(0, Vec::len);

    let mut flat = Vec::with_capacity(n_rows * width);
    for (idx, row) in rows.into_iter().enumerate() {
        if row.len() != width {
            return Err(DatasetError::ragged_row(idx, width, row.len()));
        }
        flat.extend(row);
    }

    // Shape is consistent by construction; report it as ragged otherwise.
    Array2::from_shape_vec((n_rows, width), flat)
        .map_err(|_| DatasetError::ragged_row(0, width, width))
}

fn check_lengths(features: usize, labels: Option<usize>) -> Result<usize> {
    match labels {
        Some(labels) if labels == features => Ok(features),
        Some(labels) => Err(DatasetError::data_mismatch(features, labels)),
        None => Err(DatasetError::data_mismatch(features, 0)),
    }
}

/// Validates raw feature and label rows.
///
/// Lengths are checked before any coercion. Missing labels count as a
/// label sequence of length zero.
///
/// # Errors
///
/// Returns [`DatasetError::DataMismatch`] when the outer lengths differ,
/// or a coercion error from [`coerce_rows`].
///
/// # Example
///
/// ```
/// use nn_data::validate;
/// use serde_json::json;
///
/// let features = [json!([0, 0]), json!([1, 0])];
/// let labels = [json!([0]), json!([1])];
///
/// let (x, y) = validate(&features, Some(&labels[..])).unwrap();
/// assert_eq!(x.dim(), (2, 2));
/// assert_eq!(y.dim(), (2, 1));
/// ```
pub fn validate(features: &[Value], labels: Option<&[Value]>) -> Result<Validated> {
    check_lengths(features.len(), labels.map(<[Value]>::len))?;
    let labels = labels.unwrap_or_default();
    Ok((coerce_rows(features)?, coerce_rows(labels)?))
}

/// Validates already-numeric rows.
///
/// Only the length and width checks apply.
///
/// # Errors
///
/// Returns [`DatasetError::DataMismatch`] when the outer lengths differ,
/// or [`DatasetError::RaggedRow`] for rows of unequal width.
pub fn validate_rows(features: Vec<Vec<f64>>, labels: Vec<Vec<f64>>) -> Result<Validated> {
    check_lengths(features.len(), Some(labels.len()))?;
    Ok((stack_rows(features)?, stack_rows(labels)?))
}
