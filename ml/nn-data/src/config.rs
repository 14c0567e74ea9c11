//! Dataset configuration.

use serde::{Deserialize, Serialize};

use crate::ratio::TrainFactor;
use crate::selectors::Order;

/// Configuration for building a [`Dataset`](crate::Dataset).
///
/// # Example
///
/// ```
/// use nn_data::{DatasetConfig, Order};
///
/// let config = DatasetConfig::default()
///     .with_train_factor(0.8)
///     .with_seed(42)
///     .with_order(Order::Sequential);
///
/// assert!((config.train_factor.value() - 0.8).abs() < 1e-12);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Fraction of rows assigned to training (clamped to `[0, 1]`).
    pub train_factor: TrainFactor,

    /// Random seed for reproducible partitions. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// How consumers should walk the partitioned rows.
    pub order: Order,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            train_factor: TrainFactor::default(),
            seed: None,
            order: Order::default(),
        }
    }
}

impl DatasetConfig {
    /// Creates a config with the given train factor.
    #[must_use]
    pub fn new(train_factor: f64) -> Self {
        Self {
            train_factor: TrainFactor::new(train_factor),
            ..Self::default()
        }
    }

    /// Sets the train factor, clamping it into `[0, 1]`.
    #[must_use]
    pub fn with_train_factor(mut self, train_factor: f64) -> Self {
        self.train_factor = TrainFactor::new(train_factor);
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the ordering mode.
    #[must_use]
    pub const fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}
