//! Dataset summary.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::selectors::{Order, Set};

/// Summary of a dataset and its current partition.
///
/// Useful for logging and for sanity checks before training.
///
/// # Example
///
/// ```
/// use nn_data::{Dataset, DatasetConfig};
///
/// let data = Dataset::from_rows(
///     vec![vec![0.0, 0.0], vec![1.0, 1.0]],
///     vec![vec![0.0], vec![1.0]],
///     &DatasetConfig::new(0.5).with_seed(1),
/// );
///
/// let summary = data.summary();
/// assert_eq!(summary.total_samples, 2);
/// assert_eq!(summary.feature_width, 2);
/// assert_eq!(summary.train_samples, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Load state name (`empty`, `loaded` or `invalid`).
    pub state: String,

    /// Total number of rows.
    pub total_samples: usize,

    /// Number of columns per feature row.
    pub feature_width: usize,

    /// Number of columns per label row.
    pub label_width: usize,

    /// Rows in the training set.
    pub train_samples: usize,

    /// Rows in the test set.
    pub test_samples: usize,

    /// Clamped train factor.
    pub train_factor: f64,

    /// Ordering mode for consumers.
    pub order: Order,
}

impl DatasetSummary {
    /// Summarizes a dataset.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            state: dataset.state().name().to_string(),
            total_samples: dataset.len(),
            feature_width: dataset.features().map_or(0, |f| f.ncols()),
            label_width: dataset.labels().map_or(0, |l| l.ncols()),
            train_samples: dataset.number_of_samples(Set::Train),
            test_samples: dataset.number_of_samples(Set::Test),
            train_factor: dataset.train_factor().value(),
            order: dataset.order(),
        }
    }

    /// Returns true if the dataset holds no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_samples == 0
    }

    /// Fraction of rows actually in the training set.
    ///
    /// Differs from the train factor by the floor rounding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn realized_train_ratio(&self) -> f64 {
        if self.total_samples == 0 {
            0.0
        } else {
            self.train_samples as f64 / self.total_samples as f64
        }
    }

    /// Returns a human-readable summary string.
    #[must_use]
    #[allow(clippy::let_underscore_must_use)] // String::write_fmt is infallible
    pub fn to_report(&self) -> String {
        use std::fmt::Write;

        let mut report = String::new();
        let _ = writeln!(report, "Dataset Summary");
        let _ = writeln!(report, "===============");
        let _ = writeln!(report, "State: {}", self.state);
        let _ = writeln!(report, "Total samples: {}", self.total_samples);
        let _ = writeln!(
            report,
            "Row width: {} features, {} labels",
            self.feature_width, self.label_width
        );
        let _ = writeln!(
            report,
            "Train samples: {} ({:.1}%)",
            self.train_samples,
            self.realized_train_ratio() * 100.0
        );
        let _ = writeln!(report, "Test samples: {}", self.test_samples);
        let _ = writeln!(report, "Train factor: {}", self.train_factor);
        let _ = writeln!(report, "Order: {}", self.order);

        report
    }
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} samples ({} train / {} test, {})",
            self.total_samples, self.train_samples, self.test_samples, self.state
        )
    }
}
