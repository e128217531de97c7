//! Errors reported by the standalone sorting routines.
//!
//! The dispatcher itself never fails; it recovers from every variant here by
//! falling back to quicksort.

use crate::core::Key;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SortError {
    /// An auxiliary buffer could not be reserved. The input is left unmodified.
    #[error("failed to reserve auxiliary buffer of {requested} elements")]
    AllocationFailure { requested: usize },

    /// Radix sort only orders non-negative keys.
    #[error("radix sort requires non-negative keys, found {value} at index {index}")]
    NegativeKey { index: usize, value: Key },

    #[error("invalid sort configuration: {0}")]
    InvalidConfig(String),
}

/// Reserves room for exactly `additional` elements in a fresh vector, mapping
/// allocator failure to [`SortError::AllocationFailure`].
pub(crate) fn try_with_capacity<T>(additional: usize) -> Result<Vec<T>, SortError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(additional)
        .map_err(|_| SortError::AllocationFailure {
            requested: additional,
        })?;
    Ok(buffer)
}
