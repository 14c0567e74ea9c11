//! The paired feature/label dataset.

use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::numeric::{self, Validated};
use crate::partition::IndexPartition;
use crate::ratio::TrainFactor;
use crate::selectors::{Order, Set};
use crate::summary::DatasetSummary;

/// Load state of a [`Dataset`].
///
/// Features and labels are present together or not at all. `Empty` and
/// `Invalid` behave identically for partitioning; they differ only in
/// whether the last load attempt failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DataState {
    /// No data supplied yet.
    #[default]
    Empty,

    /// Validation succeeded.
    Loaded {
        /// Feature matrix, one row per sample.
        features: Array2<f64>,
        /// Label matrix, same row count as `features`.
        labels: Array2<f64>,
    },

    /// The last load failed validation; no data is held.
    Invalid,
}

impl DataState {
    /// Returns the state name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loaded { .. } => "loaded",
            Self::Invalid => "invalid",
        }
    }

    /// Returns `true` if features and labels are present.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Number of rows held (zero unless loaded).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Loaded { features, .. } => features.nrows(),
            Self::Empty | Self::Invalid => 0,
        }
    }

    /// Returns `true` if no rows are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for DataState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Feature/label dataset with a train/test partition of its rows.
///
/// Construction never fails: invalid input leaves the dataset in
/// [`DataState::Invalid`]. Explicit [`load`](Self::load) calls report
/// the error as well.
///
/// The dataset has no internal synchronization. Share it across threads
/// behind a single lock held for the whole load or repartition call.
///
/// Cloning copies the data and partition, and moves the clone's random
/// source to the next `ChaCha8` stream: the clone's later repartitions
/// differ from the original's, yet stay reproducible for a seeded dataset.
///
/// # Example
///
/// ```
/// use nn_data::Dataset;
/// use serde_json::json;
///
/// let features = [json!([0, 0]), json!([1, 0]), json!([0, 1]), json!([1, 1])];
/// let labels = [json!([0]), json!([1]), json!([1]), json!([0])];
///
/// let data = Dataset::new(Some(&features[..]), Some(&labels[..]), 1.0);
///
/// assert!(data.is_loaded());
/// assert_eq!(data.train_indices(), &[0, 1, 2, 3]);
/// assert!(data.test_indices().is_empty());
/// ```
#[derive(Debug)]
pub struct Dataset {
    state: DataState,
    train_factor: TrainFactor,
    order: Order,
    partition: IndexPartition,
    rng: ChaCha8Rng,
}

impl Clone for Dataset {
    fn clone(&self) -> Self {
        let mut rng = self.rng.clone();
        rng.set_stream(self.rng.get_stream().wrapping_add(1));
        Self {
            state: self.state.clone(),
            train_factor: self.train_factor,
            order: self.order,
            partition: self.partition.clone(),
            rng,
        }
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty(&DatasetConfig::default())
    }
}

impl Dataset {
    fn empty(config: &DatasetConfig) -> Self {
        Self {
            state: DataState::Empty,
            train_factor: config.train_factor,
            order: config.order,
            partition: IndexPartition::empty(),
            rng: config
                .seed
                .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64),
        }
    }

    /// Creates a dataset from raw rows.
    ///
    /// `train_factor` is clamped into `[0, 1]`. Validation errors are not
    /// returned; they leave the dataset [`DataState::Invalid`].
    #[must_use]
    pub fn new(features: Option<&[Value]>, labels: Option<&[Value]>, train_factor: f64) -> Self {
        Self::with_config(features, labels, &DatasetConfig::new(train_factor))
    }

    /// Creates a dataset from raw rows using `config`.
    ///
    /// Validation errors leave the dataset [`DataState::Invalid`].
    #[must_use]
    pub fn with_config(
        features: Option<&[Value]>,
        labels: Option<&[Value]>,
        config: &DatasetConfig,
    ) -> Self {
        let mut dataset = Self::empty(config);
        if let Some(features) = features {
            dataset.settle(numeric::validate(features, labels));
        }
        dataset
    }

    /// Creates a dataset from already-numeric rows using `config`.
    ///
    /// Validation errors leave the dataset [`DataState::Invalid`].
    #[must_use]
    pub fn from_rows(
        features: Vec<Vec<f64>>,
        labels: Vec<Vec<f64>>,
        config: &DatasetConfig,
    ) -> Self {
        let mut dataset = Self::empty(config);
        dataset.settle(numeric::validate_rows(features, labels));
        dataset
    }

    /// Applies a construction-time validation result, swallowing errors.
    fn settle(&mut self, validated: Result<Validated>) {
        if let Err(err) = self.apply(validated) {
            warn!(error = %err, "Invalid data at construction, dataset left without data");
        }
    }

    /// Replaces the data with freshly validated raw rows.
    ///
    /// `None` features reset the dataset to [`DataState::Empty`]. On
    /// success the rows are repartitioned with the current train factor.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::DataMismatch`](crate::DatasetError::DataMismatch)
    /// when the lengths differ, or a coercion error for non-numeric or
    /// ragged rows. Either way the dataset is left
    /// [`DataState::Invalid`] with an empty partition.
    pub fn load(&mut self, features: Option<&[Value]>, labels: Option<&[Value]>) -> Result<()> {
        match features {
            Some(features) => self.apply(numeric::validate(features, labels)),
            None => {
                self.state = DataState::Empty;
                self.partition = IndexPartition::empty();
                Ok(())
            }
        }
    }

    /// Replaces the data with already-numeric rows.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load), minus the non-numeric case.
    pub fn load_rows(&mut self, features: Vec<Vec<f64>>, labels: Vec<Vec<f64>>) -> Result<()> {
        self.apply(numeric::validate_rows(features, labels))
    }

    fn apply(&mut self, validated: Result<Validated>) -> Result<()> {
        match validated {
            Ok((features, labels)) => {
                info!(
                    rows = features.nrows(),
                    feature_width = features.ncols(),
                    label_width = labels.ncols(),
                    "Loaded dataset"
                );
                self.state = DataState::Loaded { features, labels };
                self.repartition(None);
                Ok(())
            }
            Err(err) => {
                self.state = DataState::Invalid;
                self.partition = IndexPartition::empty();
                Err(err)
            }
        }
    }

    /// Recomputes the train/test partition with the dataset's own RNG.
    ///
    /// `Some(factor)` replaces the stored train factor (clamped); `None`
    /// reuses it. The previous partition is discarded.
    pub fn repartition(&mut self, new_train_factor: Option<f64>) {
        self.update_factor(new_train_factor);
        self.partition = sample_partition(&self.state, self.train_factor, &mut self.rng);
        self.log_partition();
    }

    /// Recomputes the train/test partition drawing from `rng`.
    pub fn repartition_with<R: Rng>(&mut self, new_train_factor: Option<f64>, rng: &mut R) {
        self.update_factor(new_train_factor);
        self.partition = sample_partition(&self.state, self.train_factor, rng);
        self.log_partition();
    }

    fn update_factor(&mut self, new_train_factor: Option<f64>) {
        if let Some(factor) = new_train_factor {
            self.train_factor = TrainFactor::new(factor);
        }
    }

    fn log_partition(&self) {
        debug!(
            state = %self.state,
            train_factor = self.train_factor.value(),
            train = self.partition.len(Set::Train),
            test = self.partition.len(Set::Test),
            "Partitioned dataset"
        );
    }

    /// Current load state.
    #[must_use]
    pub const fn state(&self) -> &DataState {
        &self.state
    }

    /// Returns `true` if features and labels are present.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Number of rows held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns `true` if no rows are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Feature matrix, if loaded.
    #[must_use]
    pub fn features(&self) -> Option<ArrayView2<'_, f64>> {
        match &self.state {
            DataState::Loaded { features, .. } => Some(features.view()),
            DataState::Empty | DataState::Invalid => None,
        }
    }

    /// Label matrix, if loaded.
    #[must_use]
    pub fn labels(&self) -> Option<ArrayView2<'_, f64>> {
        match &self.state {
            DataState::Loaded { labels, .. } => Some(labels.view()),
            DataState::Empty | DataState::Invalid => None,
        }
    }

    /// Feature and label rows at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<(ArrayView1<'_, f64>, ArrayView1<'_, f64>)> {
        match &self.state {
            DataState::Loaded { features, labels } if index < features.nrows() => {
                Some((features.row(index), labels.row(index)))
            }
            _ => None,
        }
    }

    /// Current clamped train factor.
    #[must_use]
    pub const fn train_factor(&self) -> TrainFactor {
        self.train_factor
    }

    /// Ordering mode consumers should use.
    #[must_use]
    pub const fn order(&self) -> Order {
        self.order
    }

    /// Sets the ordering mode.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    /// Current partition.
    #[must_use]
    pub const fn partition(&self) -> &IndexPartition {
        &self.partition
    }

    /// Training row indices, ascending.
    #[must_use]
    pub fn train_indices(&self) -> &[usize] {
        self.partition.train()
    }

    /// Test row indices, ascending.
    #[must_use]
    pub fn test_indices(&self) -> &[usize] {
        self.partition.test()
    }

    /// Row indices for one side of the partition.
    #[must_use]
    pub fn indices(&self, set: Set) -> &[usize] {
        self.partition.indices(set)
    }

    /// Number of rows on one side of the partition.
    #[must_use]
    pub fn number_of_samples(&self, set: Set) -> usize {
        self.partition.len(set)
    }

    /// Summary of the data and its partition.
    #[must_use]
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary::from_dataset(self)
    }
}

/// Absent data yields an empty partition without touching `rng`.
fn sample_partition<R: Rng>(state: &DataState, factor: TrainFactor, rng: &mut R) -> IndexPartition {
    match state {
        DataState::Loaded { features, .. } => IndexPartition::sample(features.nrows(), factor, rng),
        DataState::Empty | DataState::Invalid => IndexPartition::empty(),
    }
}
