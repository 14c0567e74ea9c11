//! Property-based tests for clamping, validation and partitioning.
//!
//! Run with: cargo test -p nn-data -- proptest

use nn_data::{Dataset, DatasetConfig, DatasetError, IndexPartition, TrainFactor, clamp, validate};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::{Value, json};

// =============================================================================
// Strategies
// =============================================================================

/// Equal-width numeric rows as JSON arrays.
fn arb_rows(n: usize, width: usize) -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(prop::collection::vec(-1e6..1e6f64, width), n)
        .prop_map(|rows| rows.into_iter().map(|row| json!(row)).collect())
}

/// A feature/label pair with matching row counts.
fn arb_dataset() -> impl Strategy<Value = (Vec<Value>, Vec<Value>)> {
    (0usize..40, 1usize..5, 1usize..3)
        .prop_flat_map(|(n, fw, lw)| (arb_rows(n, fw), arb_rows(n, lw)))
}

fn floor_count(total: usize, factor: f64) -> usize {
    (total as f64 * clamp(factor)).floor() as usize
}

// =============================================================================
// Clamp
// =============================================================================

proptest! {
    #[test]
    fn proptest_clamp_in_unit_interval(value in prop::num::f64::ANY) {
        let clamped = clamp(value);
        prop_assert!((0.0..=1.0).contains(&clamped));
    }

    #[test]
    fn proptest_clamp_identity_inside(value in 0.0..=1.0f64) {
        prop_assert_eq!(clamp(value), value);
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    #[test]
    fn proptest_load_equal_lengths((features, labels) in arb_dataset()) {
        let mut data = Dataset::default();
        prop_assert!(data.load(Some(features.as_slice()), Some(labels.as_slice())).is_ok());

        let n = features.len();
        prop_assert_eq!(data.features().map(|f| f.nrows()), Some(n));
        prop_assert_eq!(data.labels().map(|l| l.nrows()), Some(n));
    }

    #[test]
    fn proptest_load_mismatched_lengths(
        features in arb_rows(5, 2),
        n_labels in (0usize..12).prop_filter("length differs", |n| *n != 5),
    ) {
        let labels: Vec<Value> = (0..n_labels).map(|i| json!([i])).collect();
        let mut data = Dataset::default();

        let err = data.load(Some(features.as_slice()), Some(labels.as_slice()));

        prop_assert_eq!(err, Err(DatasetError::data_mismatch(5, n_labels)));
        prop_assert!(data.features().is_none());
        prop_assert!(data.labels().is_none());
    }

    #[test]
    fn proptest_load_non_numeric(
        features in arb_rows(6, 3),
        row in 0usize..6,
        column in 0usize..3,
        word in "[a-zA-Z]{1,8}",
    ) {
        // Words like "inf" or "NaN" parse as floats; keep only real text.
        prop_assume!(word.parse::<f64>().is_err());

        let mut features = features;
        if let Value::Array(items) = &mut features[row] {
            items[column] = json!(word);
        }
        let labels: Vec<Value> = (0..6).map(|i| json!(i)).collect();

        prop_assert!(validate(&features, Some(labels.as_slice())).is_err_and(|e| e.is_coercion()));

        let mut data = Dataset::default();
        prop_assert!(data.load(Some(features.as_slice()), Some(labels.as_slice())).is_err());
        prop_assert!(data.features().is_none());
        prop_assert!(data.labels().is_none());
    }
}

// =============================================================================
// Partitioning
// =============================================================================

proptest! {
    #[test]
    fn proptest_partition_disjoint_covering(
        total in 0usize..300,
        factor in -0.5..1.5f64,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let partition = IndexPartition::sample(total, TrainFactor::new(factor), &mut rng);

        let train = partition.train();
        let test = partition.test();

        prop_assert_eq!(train.len(), floor_count(total, factor));
        prop_assert_eq!(train.len() + test.len(), total);
        prop_assert!(train.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(test.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(train.iter().all(|i| test.binary_search(i).is_err()));

        let mut union: Vec<usize> = train.iter().chain(test).copied().collect();
        union.sort_unstable();
        prop_assert_eq!(union, (0..total).collect::<Vec<_>>());
    }

    #[test]
    fn proptest_repartition_counts(
        (features, labels) in arb_dataset(),
        factors in prop::collection::vec(-1.0..2.0f64, 1..5),
        seed in any::<u64>(),
    ) {
        let config = DatasetConfig::default().with_seed(seed);
        let mut data = Dataset::with_config(
            Some(features.as_slice()),
            Some(labels.as_slice()),
            &config,
        );
        let n = features.len();

        for factor in factors {
            data.repartition(Some(factor));
            prop_assert_eq!(data.train_indices().len(), floor_count(n, factor));
            prop_assert_eq!(data.test_indices().len(), n - floor_count(n, factor));
        }
    }
}
