//! Core types and tuning knobs for Adasort.
//!
//! This module defines:
//! - [`Key`]: The integer type the dispatcher sorts.
//! - [`SortConfig`]: Thresholds shared by the analysis engine and the dispatcher.
//! - [`Strategy`]: The outcome of analysis.
//! - [`Route`]: The label reported for each top-level sort call.

use crate::error::SortError;
use std::fmt;

/// Key type sorted by the dispatcher, analysis engine and radix sort.
pub type Key = i32;

/// Inputs shorter than this skip analysis and go straight to insertion sort.
/// Quicksort uses the same bound for its small-partition fallback.
pub const INSERTION_THRESHOLD: usize = 32;

/// Maximum number of leading elements inspected by the analysis engine.
pub const SAMPLE_SIZE: usize = 100;

/// Minimum fraction of non-descending sample pairs for the input to count as nearly sorted.
pub const NEARLY_SORTED_RATIO: f64 = 0.85;

/// Maximum fraction of distinct sample values for the input to count as low cardinality.
pub const LOW_CARDINALITY_RATIO: f64 = 0.20;

/// Thresholds consumed by [`crate::analysis::analyze`] and [`crate::algo::Sorter`].
///
/// # Examples
///
/// ```
/// use adasort::core::SortConfig;
///
/// let config = SortConfig::default()
///     .with_insertion_threshold(8)
///     .with_sample_size(16);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SortConfig {
    pub insertion_threshold: usize,
    pub sample_size: usize,
    pub nearly_sorted_ratio: f64,
    pub low_cardinality_ratio: f64,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            insertion_threshold: INSERTION_THRESHOLD,
            sample_size: SAMPLE_SIZE,
            nearly_sorted_ratio: NEARLY_SORTED_RATIO,
            low_cardinality_ratio: LOW_CARDINALITY_RATIO,
        }
    }
}

impl SortConfig {
    pub fn with_insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = threshold;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_nearly_sorted_ratio(mut self, ratio: f64) -> Self {
        self.nearly_sorted_ratio = ratio;
        self
    }

    pub fn with_low_cardinality_ratio(mut self, ratio: f64) -> Self {
        self.low_cardinality_ratio = ratio;
        self
    }

    /// Checks that the sample can hold at least one pair and that both ratios
    /// lie in `[0.0, 1.0]`.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.sample_size < 2 {
            return Err(SortError::InvalidConfig(format!(
                "sample_size must be at least 2, got {}",
                self.sample_size
            )));
        }

        for (name, ratio) in [
            ("nearly_sorted_ratio", self.nearly_sorted_ratio),
            ("low_cardinality_ratio", self.low_cardinality_ratio),
        ] {
            // NaN fails `contains` as well.
            if !(0.0..=1.0).contains(&ratio) {
                return Err(SortError::InvalidConfig(format!(
                    "{name} must be within [0.0, 1.0], got {ratio}"
                )));
            }
        }

        Ok(())
    }
}

/// Algorithm picked by the analysis engine for a full-size input.
///
/// Insertion sort is never an analysis outcome: it is only reached through the
/// dispatcher's size fast path or as quicksort's small-partition fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Nearly sorted input.
    MergeSort,
    /// Sample holds no negative keys.
    RadixSort,
    /// Negatives present; also the fallback when auxiliary memory is unavailable.
    QuickSort,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::MergeSort => "merge sort",
            Strategy::RadixSort => "radix sort",
            Strategy::QuickSort => "quicksort",
        };
        f.write_str(label)
    }
}

/// Path taken by one top-level call to the dispatcher.
///
/// Purely informative: callers may log or display it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Zero or one element, nothing to do.
    Trivial,
    /// Below the insertion threshold, analysis skipped.
    Insertion,
    /// Analysis ran and the full input was sorted with this strategy.
    Analyzed(Strategy),
}

impl Route {
    /// Returns the strategy when analysis ran.
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            Route::Analyzed(strategy) => Some(*strategy),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Trivial => f.write_str("trivial"),
            Route::Insertion => f.write_str("insertion sort"),
            Route::Analyzed(strategy) => fmt::Display::fmt(strategy, f),
        }
    }
}
