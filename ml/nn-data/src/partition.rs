//! Train/test index partitioning.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DatasetError, Result};
use crate::ratio::TrainFactor;
use crate::selectors::Set;

/// Disjoint, covering split of row indices into train and test sets.
///
/// Both index lists are sorted ascending and contain no duplicates.
/// Together they cover `0..n` exactly once.
///
/// # Example
///
/// ```
/// use nn_data::{IndexPartition, Set, TrainFactor};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let partition = IndexPartition::sample(10, TrainFactor::new(0.3), &mut rng);
///
/// assert_eq!(partition.len(Set::Train), 3);
/// assert_eq!(partition.len(Set::Test), 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PartitionLists")]
pub struct IndexPartition {
    train: Vec<usize>,
    test: Vec<usize>,
}

/// Unchecked wire form of [`IndexPartition`].
#[derive(Deserialize)]
struct PartitionLists {
    train: Vec<usize>,
    test: Vec<usize>,
}

impl TryFrom<PartitionLists> for IndexPartition {
    type Error = DatasetError;

    fn try_from(lists: PartitionLists) -> Result<Self> {
        Self::try_new(lists.train, lists.test)
    }
}

impl IndexPartition {
    /// Creates an empty partition.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            train: Vec::new(),
            test: Vec::new(),
        }
    }

    /// Partitions `0..total` by rejection sampling without replacement.
    ///
    /// Draws uniform indices from `rng`, discarding ones already taken,
    /// until `factor.train_count(total)` distinct indices are selected.
    /// The selected set strictly grows on every accepted draw over a
    /// finite domain, so the loop terminates.
    #[must_use]
    pub fn sample<R: Rng>(total: usize, factor: TrainFactor, rng: &mut R) -> Self {
        let target = factor.train_count(total);
        let mut selected = vec![false; total];

        if target == total {
            selected.fill(true);
        } else {
            let mut taken = 0;
            let mut rejected = 0usize;
            while taken < target {
                let candidate = rng.gen_range(0..total);
                if selected[candidate] {
                    rejected += 1;
                    continue;
                }
                selected[candidate] = true;
                taken += 1;
            }
            debug!(total, target, rejected, "Sampled training indices");
        }

        Self::from_mask(&selected)
    }

    /// Builds a partition from explicit index lists.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidPartition`] unless both lists are
    /// strictly ascending and together cover `0..n` exactly once.
    ///
    /// # Example
    ///
    /// ```
    /// use nn_data::IndexPartition;
    ///
    /// assert!(IndexPartition::try_new(vec![0, 2], vec![1]).is_ok());
    /// assert!(IndexPartition::try_new(vec![2, 0], vec![1]).is_err());
    /// assert!(IndexPartition::try_new(vec![0, 1], vec![1]).is_err());
    /// ```
    pub fn try_new(train: Vec<usize>, test: Vec<usize>) -> Result<Self> {
        for (name, list) in [("train", &train), ("test", &test)] {
            if let Some(pair) = list.windows(2).find(|w| w[0] >= w[1]) {
                return Err(DatasetError::invalid_partition(format!(
                    "{name} indices not strictly ascending at {} -> {}",
                    pair[0], pair[1]
                )));
            }
        }

        let total = train.len() + test.len();
        let mut seen = vec![false; total];
        for &idx in train.iter().chain(&test) {
            match seen.get_mut(idx) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(DatasetError::invalid_partition(format!(
                        "index {idx} is in both train and test"
                    )));
                }
                None => {
                    return Err(DatasetError::invalid_partition(format!(
                        "index {idx} outside 0..{total}"
                    )));
                }
            }
        }

        Ok(Self { train, test })
    }

    /// Builds a partition from a membership mask (`true` = train).
    ///
    /// Walking the mask in order yields both lists already sorted.
    #[must_use]
    pub fn from_mask(in_train: &[bool]) -> Self {
        let (train, test): (Vec<usize>, Vec<usize>) =
            (0..in_train.len()).partition(|&idx| in_train[idx]);
        Self { train, test }
    }

    /// Training row indices, ascending.
    #[must_use]
    pub fn train(&self) -> &[usize] {
        &self.train
    }

    /// Test row indices, ascending.
    #[must_use]
    pub fn test(&self) -> &[usize] {
        &self.test
    }

    /// Indices for one side of the partition.
    #[must_use]
    pub fn indices(&self, set: Set) -> &[usize] {
        match set {
            Set::Train => &self.train,
            Set::Test => &self.test,
        }
    }

    /// Number of indices on one side of the partition.
    #[must_use]
    pub fn len(&self, set: Set) -> usize {
        self.indices(set).len()
    }

    /// Total number of partitioned rows.
    #[must_use]
    pub fn total(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// Returns `true` if no rows are partitioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.test.is_empty()
    }

    /// Returns which set a row belongs to, if any.
    #[must_use]
    pub fn set_of(&self, index: usize) -> Option<Set> {
        if self.train.binary_search(&index).is_ok() {
            Some(Set::Train)
        } else if self.test.binary_search(&index).is_ok() {
            Some(Set::Test)
        } else {
            None
        }
    }
}
