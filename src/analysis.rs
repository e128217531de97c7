//! Heuristic analysis engine.
//!
//! Inspects the first `min(n, sample_size)` keys and picks a [`Strategy`].
//! Heuristics are evaluated in a fixed priority order and the first match wins:
//!
//! 1. **Nearly sorted**: the fraction of non-descending adjacent pairs reaches
//!    `nearly_sorted_ratio` → [`Strategy::MergeSort`].
//! 2. **Non-negative**: no sampled key is negative → [`Strategy::RadixSort`].
//! 3. **Low cardinality**: distinct sampled values make up at most
//!    `low_cardinality_ratio` of the sample → [`Strategy::QuickSort`].
//! 4. **Default** → [`Strategy::QuickSort`].
//!
//! Heuristic 3 currently lands on the same strategy as the default. A three-way
//! partitioning quicksort would be the better fit for heavy duplication.

use crate::core::{Key, SortConfig, Strategy};
use crate::error::{SortError, try_with_capacity};
use log::{debug, trace, warn};

/// Cheap signals computed in a single scan over the sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleStats {
    pub sample_size: usize,
    /// Adjacent pairs `(s[i], s[i + 1])` with `s[i] <= s[i + 1]`.
    pub ascending_pairs: usize,
    pub has_negative: bool,
}

impl SampleStats {
    /// Fraction of adjacent pairs that are non-descending, or `None` when the
    /// sample holds fewer than two keys.
    pub fn ascending_ratio(&self) -> Option<f64> {
        if self.sample_size <= 1 {
            return None;
        }
        Some(self.ascending_pairs as f64 / (self.sample_size - 1) as f64)
    }
}

/// Scans the sample prefix of `v` once, counting non-descending pairs and
/// noting whether any sampled key is negative.
pub fn sample_stats(v: &[Key], config: &SortConfig) -> SampleStats {
    let sample = &v[..v.len().min(config.sample_size)];

    let ascending_pairs = sample.windows(2).filter(|w| w[0] <= w[1]).count();
    let has_negative = sample.iter().any(|&x| x < 0);

    SampleStats {
        sample_size: sample.len(),
        ascending_pairs,
        has_negative,
    }
}

/// Counts maximal runs of equal values in a sorted copy of `sample`.
///
/// # Errors
///
/// Returns [`SortError::AllocationFailure`] if the copy cannot be reserved.
pub fn count_unique(sample: &[Key]) -> Result<usize, SortError> {
    if sample.is_empty() {
        return Ok(0);
    }

    let mut sorted = try_with_capacity(sample.len())?;
    sorted.extend_from_slice(sample);
    sorted.sort_unstable();

    Ok(1 + sorted.windows(2).filter(|w| w[0] != w[1]).count())
}

/// Chooses a strategy for sorting `v`. Never mutates `v` and depends only on
/// its sample prefix.
///
/// # Examples
///
/// ```
/// use adasort::analysis::analyze;
/// use adasort::core::{SortConfig, Strategy};
///
/// // 10 of 11 adjacent pairs are non-descending.
/// let nearly_sorted = [1, 2, 3, 4, 5, 6, 7, 8, 10, 9, 11, 12];
/// assert_eq!(analyze(&nearly_sorted, &SortConfig::default()), Strategy::MergeSort);
///
/// // Only 9 of 11 here, below the 0.85 cutoff, and no negatives.
/// let shuffled = [1, 2, 3, 10, 5, 6, 7, 8, 9, 4, 11, 12];
/// assert_eq!(analyze(&shuffled, &SortConfig::default()), Strategy::RadixSort);
/// ```
pub fn analyze(v: &[Key], config: &SortConfig) -> Strategy {
    let stats = sample_stats(v, config);
    trace!(
        "sample of {} keys: {} ascending pairs, negatives: {}",
        stats.sample_size, stats.ascending_pairs, stats.has_negative
    );

    if stats
        .ascending_ratio()
        .is_some_and(|ratio| ratio >= config.nearly_sorted_ratio)
    {
        return Strategy::MergeSort;
    }

    if !stats.has_negative {
        return Strategy::RadixSort;
    }

    let unique = match count_unique(&v[..stats.sample_size]) {
        Ok(unique) => unique,
        Err(err) => {
            warn!("cardinality check skipped ({err}), using quicksort");
            return Strategy::QuickSort;
        }
    };
    trace!("{unique} distinct keys in sample");

    if unique as f64 / stats.sample_size as f64 <= config.low_cardinality_ratio {
        debug!(
            "low cardinality sample ({unique}/{}), using quicksort",
            stats.sample_size
        );
        return Strategy::QuickSort;
    }

    Strategy::QuickSort
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_bounded() {
        let config = SortConfig::default().with_sample_size(4);
        // Only [4, 3, 2, 1] is inspected; the negative tail is ignored.
        let data = [4, 3, 2, 1, -9, -9, -9];

        let stats = sample_stats(&data, &config);
        assert_eq!(stats.sample_size, 4);
        assert_eq!(stats.ascending_pairs, 0);
        assert!(!stats.has_negative);
        assert_eq!(analyze(&data, &config), Strategy::RadixSort);
    }

    #[test]
    fn test_last_sampled_key_counts_as_negative() {
        let data = [5, 3, 4, 1, -1];
        let stats = sample_stats(&data, &SortConfig::default());
        assert!(stats.has_negative);
    }

    #[test]
    fn test_equal_pairs_count_as_ascending() {
        let data = [7; 50];
        let stats = sample_stats(&data, &SortConfig::default());
        assert_eq!(stats.ascending_pairs, 49);
        assert_eq!(stats.ascending_ratio(), Some(1.0));
        assert_eq!(analyze(&data, &SortConfig::default()), Strategy::MergeSort);
    }

    #[test]
    fn test_ratio_undefined_for_single_key() {
        let stats = sample_stats(&[-3], &SortConfig::default());
        assert_eq!(stats.ascending_ratio(), None);
        // Falls through past the nearly-sorted check.
        assert_eq!(analyze(&[-3], &SortConfig::default()), Strategy::QuickSort);
        assert_eq!(analyze(&[3], &SortConfig::default()), Strategy::RadixSort);
    }

    #[test]
    fn test_nearly_sorted_boundary() {
        // 20 keys, 19 pairs; one descent gives 18/19 ≈ 0.947.
        let mut data: Vec<Key> = (-10..10).collect();
        data.swap(5, 6);
        assert_eq!(analyze(&data, &SortConfig::default()), Strategy::MergeSort);

        let strict = SortConfig::default().with_nearly_sorted_ratio(1.0);
        assert_eq!(analyze(&data, &strict), Strategy::QuickSort);
    }

    #[test]
    fn test_count_unique() {
        assert_eq!(count_unique(&[]), Ok(0));
        assert_eq!(count_unique(&[3, -1, 3, 3, -1, 0]), Ok(3));
        assert_eq!(count_unique(&[5; 10]), Ok(1));
    }

    #[test]
    fn test_negatives_go_to_quicksort() {
        let low_cardinality: Vec<Key> = (0..100).map(|i| [3, -2, 1][i % 3]).collect();
        assert_eq!(count_unique(&low_cardinality), Ok(3));
        assert_eq!(
            analyze(&low_cardinality, &SortConfig::default()),
            Strategy::QuickSort
        );

        let distinct: Vec<Key> = (0..100).map(|i| if i % 2 == 0 { -i } else { i * 7 % 50 }).collect();
        assert_eq!(analyze(&distinct, &SortConfig::default()), Strategy::QuickSort);
    }

    #[test]
    fn test_deterministic() {
        let data: Vec<Key> = (0..300).map(|i| (i * 37 % 101) - 50).collect();
        let config = SortConfig::default();
        let before = data.clone();

        assert_eq!(analyze(&data, &config), analyze(&data, &config));
        assert_eq!(data, before);
    }
}
