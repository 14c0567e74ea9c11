//! Paired feature/label datasets for supervised learning.
//!
//! This crate validates feature and label rows, stores them as numeric
//! matrices, and splits their row indices into disjoint train and test
//! sets:
//!
//! # Validation
//!
//! - [`validate`] - Coerce raw rows into fixed-width `f64` matrices
//! - [`coerce_value`] - Coerce a single element
//! - [`DatasetError`] - Length mismatch or non-numeric input
//!
//! # Partitioning
//!
//! - [`clamp`] / [`TrainFactor`] - Training fraction, clamped to `[0, 1]`
//! - [`IndexPartition`] - Sorted, disjoint train/test row indices
//!
//! # Dataset
//!
//! - [`Dataset`] - Owns the data, the partition and its random source
//! - [`DataState`] - `Empty`, `Loaded` or `Invalid`
//! - [`DatasetConfig`] - Train factor, seed and ordering mode
//! - [`DatasetSummary`] - Counts for logging and sanity checks
//!
//! # Example
//!
//! ```
//! use nn_data::{Dataset, DatasetConfig, Set};
//! use serde_json::json;
//!
//! let x: Vec<_> = (0..10).map(|i| json!(i)).collect();
//! let mut data = Dataset::with_config(
//!     Some(x.as_slice()),
//!     Some(x.as_slice()),
//!     &DatasetConfig::default().with_seed(42),
//! );
//!
//! data.repartition(Some(0.3));
//! assert_eq!(data.number_of_samples(Set::Train), 3);
//! assert_eq!(data.number_of_samples(Set::Test), 7);
//! ```
//!
//! Constructors never fail; bad input leaves the dataset
//! [`DataState::Invalid`]. [`Dataset::load`] reports the error.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod dataset;
mod error;
mod numeric;
mod partition;
mod ratio;
mod selectors;
mod summary;

// Re-export dataset types
pub use dataset::{DataState, Dataset};

// Re-export validation
pub use numeric::{Validated, coerce_rows, coerce_value, validate, validate_rows};

// Re-export partitioning
pub use partition::IndexPartition;
pub use ratio::{TrainFactor, clamp};

// Re-export enumerations, config and summary
pub use config::DatasetConfig;
pub use selectors::{Order, Set};
pub use summary::DatasetSummary;

// Re-export error types
pub use error::{DatasetError, Result};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        DataState, Dataset, DatasetConfig, DatasetError, DatasetSummary, IndexPartition, Order,
        Set, TrainFactor, clamp, validate,
    };
}
