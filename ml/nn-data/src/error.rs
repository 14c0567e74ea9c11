//! Error types for nn-data crate.

use thiserror::Error;

/// Errors that can occur while loading a dataset.
///
/// There are two kinds: a length mismatch between features and labels,
/// and a value that cannot be stored in a fixed-width numeric array.
/// Use [`is_mismatch`](Self::is_mismatch) and
/// [`is_coercion`](Self::is_coercion) to tell them apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    /// Features and labels have different outer lengths.
    #[error(
        "features and labels must be of the same length (features: {features}, labels: {labels})"
    )]
    DataMismatch {
        /// Number of feature rows.
        features: usize,
        /// Number of label rows.
        labels: usize,
    },

    /// A row element could not be coerced to a floating-point value.
    #[error("non-numeric value at row {row}, column {column}: {value}")]
    NonNumeric {
        /// Row index.
        row: usize,
        /// Column index within the row.
        column: usize,
        /// The offending value, rendered as JSON.
        value: String,
    },

    /// A row does not have the same width as the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        /// Row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// Train/test index lists that are unsorted, overlapping or not
    /// covering `0..n`. Never produced by loading.
    #[error("invalid index partition: {0}")]
    InvalidPartition(String),
}

impl DatasetError {
    /// Creates a data mismatch error.
    #[must_use]
    pub const fn data_mismatch(features: usize, labels: usize) -> Self {
        Self::DataMismatch { features, labels }
    }

    /// Creates a non-numeric value error.
    #[must_use]
    pub fn non_numeric(row: usize, column: usize, value: impl Into<String>) -> Self {
        Self::NonNumeric {
            row,
            column,
            value: value.into(),
        }
    }

    /// Creates a ragged row error.
    #[must_use]
    pub const fn ragged_row(row: usize, expected: usize, found: usize) -> Self {
        Self::RaggedRow {
            row,
            expected,
            found,
        }
    }

    /// Creates an invalid partition error.
    #[must_use]
    pub fn invalid_partition(reason: impl Into<String>) -> Self {
        Self::InvalidPartition(reason.into())
    }

    /// Returns `true` for a features/labels length mismatch.
    #[must_use]
    pub const fn is_mismatch(&self) -> bool {
        matches!(self, Self::DataMismatch { .. })
    }

    /// Returns `true` when a value could not be stored as a number.
    #[must_use]
    pub const fn is_coercion(&self) -> bool {
        matches!(self, Self::NonNumeric { .. } | Self::RaggedRow { .. })
    }
}

/// Result type for nn-data operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
