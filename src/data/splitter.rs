// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles rows with a SEEDED generator and splits them into:
//   - Training set: used to fit the model
//   - Test set:     held out to score the fitted model
//
// Why a fixed seed?
//   The train and test files are consumed by later stages.
//   Re-running ingestion on the same input must produce the
//   same two files, so the permutation has to be reproducible.
//
// Sizes:
//   n_test  = ceil(test_size * n)
//   n_train = n - n_test
//   e.g. 100 rows with test_size 0.2 → 80 train, 20 test
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom over
// the row indices, driven by StdRng::seed_from_u64(seed).
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Fraction of rows held out for testing
pub const TEST_SIZE: f64 = 0.2;

/// Seed for the shuffle, so every run yields the same split
pub const RANDOM_STATE: u64 = 42;

/// Shuffle `samples` with `seed` and split into (train, test).
///
/// # Arguments
/// * `samples`   - All rows (consumed by this function)
/// * `test_size` - Proportion held out for testing, in (0, 1)
/// * `seed`      - Seed for the shuffle
///
/// # Errors
/// When there are no samples, when `test_size` is outside (0, 1),
/// or when either side of the split would end up empty.
///
/// # Example
/// ```ignore
/// let (train, test) = train_test_split(rows, TEST_SIZE, RANDOM_STATE)?;
/// // train has 80% of rows, test has 20%
/// ```
pub fn train_test_split<T>(samples: Vec<T>, test_size: f64, seed: u64) -> Result<(Vec<T>, Vec<T>)> {
    let total = samples.len();

    if total == 0 {
        bail!("Cannot split an empty dataset");
    }
    if !(test_size > 0.0 && test_size < 1.0) {
        bail!("test_size must be in (0, 1), got {test_size}");
    }

    let n_test  = ((total as f64) * test_size).ceil() as usize;
    let n_train = total.saturating_sub(n_test);

    if n_train == 0 {
        bail!(
            "With {total} rows and test_size {test_size}, the train set would be empty"
        );
    }

    // Shuffle positions rather than rows, then hand out each row
    // once, keeping the permuted order within each side
    let mut order: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let mut slots: Vec<Option<T>> = samples.into_iter().map(Some).collect();

    let test: Vec<T>  = order[..n_test].iter().filter_map(|&i| slots[i].take()).collect();
    let train: Vec<T> = order[n_test..].iter().filter_map(|&i| slots[i].take()).collect();

    tracing::debug!(
        "Dataset split: {} training, {} test ({}% / {}%)",
        train.len(),
        test.len(),
        (train.len() * 100) / total,
        (test.len()  * 100) / total,
    );

    Ok((train, test))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = train_test_split(items, TEST_SIZE, RANDOM_STATE).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_test_size_rounds_up() {
        // 0.2 * 7 = 1.4 → 2 test rows
        let items: Vec<usize> = (0..7).collect();
        let (train, test)     = train_test_split(items, 0.2, RANDOM_STATE).unwrap();
        assert_eq!(test.len(),  2);
        assert_eq!(train.len(), 5);
    }

    #[test]
    fn test_disjoint_and_complete() {
        let items: Vec<usize> = (0..53).collect();
        let (train, test)     = train_test_split(items, TEST_SIZE, RANDOM_STATE).unwrap();

        let train_set: HashSet<_> = train.iter().copied().collect();
        let test_set:  HashSet<_> = test.iter().copied().collect();
        assert!(train_set.is_disjoint(&test_set));

        let union: HashSet<_> = train_set.union(&test_set).copied().collect();
        assert_eq!(union, (0..53).collect::<HashSet<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = train_test_split((0..200).collect::<Vec<_>>(), TEST_SIZE, RANDOM_STATE).unwrap();
        let b = train_test_split((0..200).collect::<Vec<_>>(), TEST_SIZE, RANDOM_STATE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_membership() {
        let a = train_test_split((0..200).collect::<Vec<_>>(), TEST_SIZE, 42).unwrap();
        let b = train_test_split((0..200).collect::<Vec<_>>(), TEST_SIZE, 7).unwrap();
        assert_ne!(a.1, b.1);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        assert!(train_test_split(items, TEST_SIZE, RANDOM_STATE).is_err());
    }

    #[test]
    fn test_single_row_is_error() {
        // ceil(0.2) = 1 test row leaves nothing to train on
        assert!(train_test_split(vec![1], TEST_SIZE, RANDOM_STATE).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_fraction() {
        assert!(train_test_split(vec![1, 2, 3], 0.0, RANDOM_STATE).is_err());
        assert!(train_test_split(vec![1, 2, 3], 1.0, RANDOM_STATE).is_err());
    }
}
