//! Top-down merge sort.
//!
//! One scratch buffer of `n` elements is reserved before the input is touched
//! and reused by every merge step. Each merge copies the two halves into
//! exactly-sized regions of that buffer and interleaves them back.

use crate::error::{SortError, try_with_capacity};

/// Sorts `v` in ascending order. Stable.
///
/// # Errors
///
/// Returns [`SortError::AllocationFailure`] if the scratch buffer cannot be
/// reserved. In that case `v` is left exactly as it was.
///
/// # Examples
///
/// ```
/// use adasort::merge::merge_sort;
///
/// let mut data = vec![1, 2, 3, 10, 5, 6, 7, 8, 9, 4, 11, 12];
/// merge_sort(&mut data).unwrap();
/// assert_eq!(data, (1..=12).collect::<Vec<_>>());
/// ```
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) -> Result<(), SortError> {
    if v.len() <= 1 {
        return Ok(());
    }

    let mut scratch = try_with_capacity(v.len())?;
    sort_range(v, &mut scratch);
    Ok(())
}

fn sort_range<T: Ord + Clone>(v: &mut [T], scratch: &mut Vec<T>) {
    let len = v.len();
    if len <= 1 {
        return;
    }

    // mid = low + (high - low) / 2 over the inclusive range [0, len - 1].
    let left_len = (len - 1) / 2 + 1;
    let (left, right) = v.split_at_mut(left_len);
    sort_range(left, scratch);
    sort_range(right, scratch);

    merge(v, left_len, scratch);
}

/// Merges the sorted runs `v[..left_len]` and `v[left_len..]`.
///
/// `scratch` must have capacity for `v.len()` elements so that filling it
/// never reallocates.
fn merge<T: Ord + Clone>(v: &mut [T], left_len: usize, scratch: &mut Vec<T>) {
    debug_assert!(scratch.capacity() >= v.len());

    scratch.clear();
    scratch.extend_from_slice(v);
    let (left, right) = scratch.split_at(left_len);

    let (mut i, mut j) = (0, 0);
    for slot in v.iter_mut() {
        // Ties take from the left run, which keeps the merge stable.
        let take_left = j == right.len() || (i < left.len() && left[i] <= right[j]);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }

    scratch.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cmp::Ordering;

    #[derive(Debug, Clone)]
    struct Tagged {
        key: i32,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn test_trivial_lengths() {
        let mut empty: Vec<i32> = vec![];
        merge_sort(&mut empty).unwrap();
        assert!(empty.is_empty());

        let mut single = vec![-5];
        merge_sort(&mut single).unwrap();
        assert_eq!(single, vec![-5]);

        let mut pair = vec![2, 1];
        merge_sort(&mut pair).unwrap();
        assert_eq!(pair, vec![1, 2]);
    }

    #[test]
    fn test_random_against_std() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let len = rng.random_range(0..700);
            let mut data: Vec<i32> = (0..len).map(|_| rng.random()).collect();
            let mut expected = data.clone();
            expected.sort();

            merge_sort(&mut data).unwrap();
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn test_stable_on_tagged_pairs() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut data: Vec<Tagged> = (0..1000)
            .map(|tag| Tagged {
                key: rng.random_range(0..10),
                tag,
            })
            .collect();

        merge_sort(&mut data).unwrap();

        for w in data.windows(2) {
            assert!(w[0].key <= w[1].key);
            if w[0].key == w[1].key {
                assert!(w[0].tag < w[1].tag, "equal keys reordered: {:?}", w);
            }
        }
    }

    #[test]
    fn test_odd_split_puts_extra_on_left() {
        // Three elements split as [0, 1] and [2].
        let mut data = vec![
            Tagged { key: 1, tag: 0 },
            Tagged { key: 0, tag: 1 },
            Tagged { key: 1, tag: 2 },
        ];
        merge_sort(&mut data).unwrap();
        let tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
        assert_eq!(tags, vec![1, 0, 2]);
    }
}
