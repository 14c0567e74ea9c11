//! Train factor clamping.

use serde::{Deserialize, Serialize};

/// Clamps a value into `[0, 1]`.
///
/// Total over all `f64` inputs: `NaN` clamps to `0`.
///
/// # Example
///
/// ```
/// use nn_data::clamp;
///
/// assert_eq!(clamp(-5.0), 0.0);
/// assert_eq!(clamp(5.0), 1.0);
/// assert_eq!(clamp(0.25), 0.25);
/// ```
#[must_use]
pub fn clamp(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Fraction of rows assigned to the training set.
///
/// Always inside `[0, 1]`; the remainder goes to the test set.
///
/// # Example
///
/// ```
/// use nn_data::TrainFactor;
///
/// let factor = TrainFactor::new(0.8);
/// assert!((factor.value() - 0.8).abs() < 1e-12);
/// assert!((factor.test_ratio() - 0.2).abs() < 1e-12);
///
/// assert_eq!(TrainFactor::new(1.7).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TrainFactor(f64);

impl TrainFactor {
    /// Creates a train factor, clamping the input into `[0, 1]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(clamp(value))
    }

    /// Returns the training fraction.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the test fraction.
    #[must_use]
    pub fn test_ratio(self) -> f64 {
        1.0 - self.0
    }

    /// Number of training rows for a dataset of `total` rows.
    ///
    /// Rounds down, so the result never exceeds `total`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn train_count(self, total: usize) -> usize {
        ((total as f64 * self.0).floor() as usize).min(total)
    }

    /// Every row goes to training.
    pub const ALL: Self = Self(1.0);

    /// No row goes to training.
    pub const NONE: Self = Self(0.0);

    /// Common 90/10 split.
    pub const NINETY_TEN: Self = Self(0.9);
}

impl Default for TrainFactor {
    fn default() -> Self {
        Self::NINETY_TEN
    }
}

impl From<f64> for TrainFactor {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrainFactor> for f64 {
    fn from(factor: TrainFactor) -> Self {
        factor.0
    }
}

impl std::fmt::Display for TrainFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
