//! Small-range sorter.
//!
//! Used directly by the dispatcher for short inputs and by quicksort for
//! partitions below the insertion threshold.

/// Sorts `v` in ascending order using shift-insert insertion sort.
///
/// Stable: an element only moves past strictly greater predecessors.
/// Runs in `O(k^2)` for a slice of length `k`, so callers keep `k` small.
///
/// A sub-range `[low, high]` of a larger buffer is sorted by passing
/// `&mut v[low..=high]`.
///
/// # Examples
///
/// ```
/// use adasort::insertion::insertion_sort;
///
/// let mut data = [5, 1, 4, 2, 8];
/// insertion_sort(&mut data);
/// assert_eq!(data, [1, 2, 4, 5, 8]);
/// ```
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    for i in 1..v.len() {
        let mut hole = i;
        while hole > 0 && v[hole - 1] > v[i] {
            hole -= 1;
        }
        // Shifts v[hole..i] one slot right and drops the held element into the hole.
        v[hole..=i].rotate_right(1);
    }
}
