//! LSD radix sort over base 10.
//!
//! Each pass is a stable counting sort keyed on one decimal digit:
//! 1. Counts how many keys fall into each of the ten digit buckets.
//! 2. Turns the counts into inclusive prefix sums (one past each bucket's last slot).
//! 3. Scans right-to-left, placing each key into the output buffer.
//! 4. Copies the output buffer back over the input.
//!
//! Passes run from the least significant digit up to the most significant
//! digit of the largest key.

use crate::core::Key;
use crate::error::{SortError, try_with_capacity};
use cuneiform::cuneiform;

const RADIX: Key = 10;
const BUCKETS: usize = RADIX as usize;

// Cache-aligned digit histogram.
#[cuneiform]
struct DigitCounts {
    data: [usize; BUCKETS],
}

/// Sorts non-negative keys in ascending order and returns the number of digit
/// passes performed, which equals the decimal digit count of the maximum key
/// (zero when every key is `0` or the slice is empty).
///
/// # Errors
///
/// - [`SortError::NegativeKey`] if any key is negative.
/// - [`SortError::AllocationFailure`] if the output buffer cannot be reserved.
///
/// Both are detected before the first pass, so `v` is unmodified on error.
///
/// # Examples
///
/// ```
/// use adasort::radix::radix_sort;
///
/// let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
/// let passes = radix_sort(&mut data).unwrap();
///
/// assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
/// assert_eq!(passes, 3);
/// ```
pub fn radix_sort(v: &mut [Key]) -> Result<u32, SortError> {
    let max = max_non_negative(v)?;
    if max == 0 {
        return Ok(0);
    }

    let mut output = try_with_capacity(v.len())?;
    output.resize(v.len(), 0);

    let mut passes = 0;
    let mut exp: Key = 1;
    while max / exp > 0 {
        counting_pass(v, &mut output, exp);
        passes += 1;

        // The next place value would exceed Key::MAX, so every digit is done.
        exp = match exp.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(passes)
}

/// Returns the largest key, or the first negative key as an error.
fn max_non_negative(v: &[Key]) -> Result<Key, SortError> {
    let mut max = 0;
    for (index, &value) in v.iter().enumerate() {
        if value < 0 {
            return Err(SortError::NegativeKey { index, value });
        }
        max = max.max(value);
    }
    Ok(max)
}

#[inline(always)]
fn digit(value: Key, exp: Key) -> usize {
    ((value / exp) % RADIX) as usize
}

fn counting_pass(v: &mut [Key], output: &mut [Key], exp: Key) {
    let mut counts = DigitCounts {
        data: [0; BUCKETS],
    };
    let counts = &mut counts.data;

    v.iter().for_each(|&value| counts[digit(value, exp)] += 1);

    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    // Right-to-left keeps equal digits in their current relative order.
    v.iter().rev().for_each(|&value| {
        let d = digit(value, exp);
        counts[d] -= 1;
        output[counts[d]] = value;
    });

    v.copy_from_slice(output);
}
