//! End-to-end scenarios for dataset construction, loading and partitioning.

use nn_data::{DataState, Dataset, DatasetConfig, DatasetError, Set, clamp};
use serde_json::{Value, json};

fn rows(values: Value) -> Vec<Value> {
    match values {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn xor_features() -> Vec<Value> {
    rows(json!([[0, 0], [1, 0], [0, 1], [1, 1]]))
}

fn xor_labels() -> Vec<Value> {
    rows(json!([[0], [1], [1], [0]]))
}

fn range(n: i64) -> Vec<Value> {
    (0..n).map(|i| json!(i)).collect()
}

#[test]
fn xor_with_full_train_factor() {
    let features = xor_features();
    let labels = xor_labels();

    let data = Dataset::new(Some(features.as_slice()), Some(labels.as_slice()), 1.0);

    assert!(data.is_loaded());
    assert_eq!(data.features().map(|f| f.dim()), Some((4, 2)));
    assert_eq!(data.labels().map(|l| l.dim()), Some((4, 1)));
    assert_eq!(data.train_indices().len(), 4);
    assert!(data.test_indices().is_empty());
}

#[test]
fn ten_rows_repartitioned_thirty_percent() {
    let x = range(10);
    let mut data = Dataset::new(Some(x.as_slice()), Some(x.as_slice()), 0.9);

    data.repartition(Some(0.3));

    assert_eq!(data.train_indices().len(), 3);
    assert_eq!(data.test_indices().len(), 7);

    let mut union: Vec<usize> = data
        .train_indices()
        .iter()
        .chain(data.test_indices())
        .copied()
        .collect();
    union.sort_unstable();
    union.dedup();
    assert_eq!(union, (0..10).collect::<Vec<_>>());
}

#[test]
fn repartition_twice_keeps_counts() {
    let x = range(10);
    let mut data = Dataset::new(Some(x.as_slice()), Some(x.as_slice()), 0.9);

    for _ in 0..2 {
        data.repartition(Some(0.3));
        assert_eq!(data.number_of_samples(Set::Train), 3);
        assert_eq!(data.number_of_samples(Set::Test), 7);
    }
}

#[test]
fn large_dataset_half_split() {
    let x = range(100);
    let data = Dataset::new(Some(x.as_slice()), Some(x.as_slice()), 0.5);

    assert_eq!(data.len(), 100);
    assert_eq!(data.number_of_samples(Set::Train), 50);
    assert_eq!(data.number_of_samples(Set::Test), 50);
}

#[test]
fn constructor_swallows_mismatch() {
    let features = rows(json!([[0, 0], [1, 0]]));
    let labels = xor_labels();

    let data = Dataset::new(Some(features.as_slice()), Some(labels.as_slice()), 0.8);

    assert_eq!(data.state(), &DataState::Invalid);
    assert!(data.features().is_none());
    assert!(data.labels().is_none());
    assert!(data.train_indices().is_empty());
    assert!(data.test_indices().is_empty());
}

#[test]
fn constructor_swallows_non_numeric() {
    let bad_features = rows(json!([[0, 0], [1, "Cat"], [0, 1], [1, "Green"]]));
    let bad_labels = rows(json!([[0], [1], ["Cat"], [0]]));
    let features = xor_features();
    let labels = xor_labels();

    let data = Dataset::new(Some(bad_features.as_slice()), Some(labels.as_slice()), 0.8);
    assert!(data.features().is_none() && data.labels().is_none());

    let data = Dataset::new(Some(features.as_slice()), Some(bad_labels.as_slice()), 0.8);
    assert!(data.features().is_none() && data.labels().is_none());
}

#[test]
fn load_raises_mismatch() {
    let features = rows(json!([[0, 0], [1, 0]]));
    let labels = xor_labels();
    let mut data = Dataset::default();

    let result = data.load(Some(features.as_slice()), Some(labels.as_slice()));

    assert_eq!(result, Err(DatasetError::data_mismatch(2, 4)));
    assert_eq!(data.state(), &DataState::Invalid);
}

#[test]
fn load_raises_non_numeric() {
    let bad_features = rows(json!([[0, 0], [1, "Cat"], [0, 1], [1, "Green"]]));
    let labels = xor_labels();
    let mut data = Dataset::default();

    let result = data.load(Some(bad_features.as_slice()), Some(labels.as_slice()));

    assert!(result.is_err_and(|err| err.is_coercion()));
    assert_eq!(data.state(), &DataState::Invalid);
}

#[test]
fn train_factor_is_clamped() {
    let features = xor_features();
    let labels = xor_labels();

    let low = Dataset::new(Some(features.as_slice()), Some(labels.as_slice()), -5.0);
    let high = Dataset::new(Some(features.as_slice()), Some(labels.as_slice()), 5.0);

    assert_eq!(low.train_factor().value(), 0.0);
    assert_eq!(high.train_factor().value(), 1.0);
    assert_eq!(low.number_of_samples(Set::Test), 4);
    assert_eq!(high.number_of_samples(Set::Train), 4);
    assert_eq!(clamp(-5.0), 0.0);
    assert_eq!(clamp(5.0), 1.0);
}

#[test]
fn reload_supersedes_state() {
    let features = xor_features();
    let labels = xor_labels();
    let config = DatasetConfig::new(0.5).with_seed(9);
    let mut data = Dataset::with_config(None, None, &config);
    assert_eq!(data.state(), &DataState::Empty);

    assert!(data.load(Some(features.as_slice()), Some(labels.as_slice())).is_ok());
    assert_eq!(data.number_of_samples(Set::Train), 2);

    let short = rows(json!([[0, 0]]));
    assert!(data.load(Some(short.as_slice()), Some(labels.as_slice())).is_err());
    assert_eq!(data.state(), &DataState::Invalid);

    assert!(data.load(Some(features.as_slice()), Some(labels.as_slice())).is_ok());
    assert!(data.is_loaded());
    assert_eq!(data.number_of_samples(Set::Test), 2);
}

#[test]
fn shared_behind_a_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let x = range(20);
    let data = Arc::new(Mutex::new(Dataset::new(Some(x.as_slice()), Some(x.as_slice()), 0.5)));

    let handles: Vec<_> = [0.1, 0.4, 0.8]
        .into_iter()
        .map(|factor| {
            let data = Arc::clone(&data);
            thread::spawn(move || {
                let mut guard = data.lock().unwrap();
                guard.repartition(Some(factor));
                (guard.number_of_samples(Set::Train), guard.train_factor().value())
            })
        })
        .collect();

    for handle in handles {
        let (train, factor) = handle.join().unwrap();
        assert_eq!(train, (20.0 * factor).floor() as usize);
    }
}
