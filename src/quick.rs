//! Lomuto quicksort with an insertion sort fallback for small partitions.
//!
//! The pivot is always the last element of the range. No randomization or
//! median-of-three is performed, so adversarial inputs (descending runs, many
//! equal keys) degrade to `O(n^2)` time. Stack depth stays `O(log n)` because
//! only the smaller partition is recursed into.

use crate::insertion::insertion_sort;

/// Sorts `v` in ascending order. Not stable.
///
/// Partitions of fewer than `insertion_threshold` elements are handed to
/// [`insertion_sort`].
///
/// # Examples
///
/// ```
/// use adasort::quick::quick_sort;
///
/// let mut data = vec![9, -3, 5, 2, 6, 8, -6, 1, 3, 4, 15, 0, -10];
/// quick_sort(&mut data, 4);
/// assert_eq!(data, vec![-10, -6, -3, 0, 1, 2, 3, 4, 5, 6, 8, 9, 15]);
/// ```
pub fn quick_sort<T: Ord>(v: &mut [T], insertion_threshold: usize) {
    let mut v = v;

    loop {
        let len = v.len();
        if len <= 1 {
            return;
        }

        if len < insertion_threshold {
            insertion_sort(v);
            return;
        }

        let pivot = partition(v);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, insertion_threshold);
            v = right;
        } else {
            quick_sort(right, insertion_threshold);
            v = left;
        }
    }
}

/// Lomuto partition around the last element of `v`.
///
/// Elements strictly less than the pivot are swapped to the front as they are
/// encountered. The pivot is then swapped to the first slot past them, and
/// that index is returned: everything before it is `< pivot`, everything after
/// it is `>= pivot`.
///
/// # Panics
///
/// Panics if `v` is empty.
pub fn partition<T: Ord>(v: &mut [T]) -> usize {
    let high = v.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if v[j] < v[high] {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    v.swap(boundary, high);
    boundary
}
