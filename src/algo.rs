//! Adaptive dispatcher.
//!
//! Routes each top-level sort to one of:
//! - **Insertion Sort**: inputs below the insertion threshold, without analysis.
//! - **Merge Sort**: nearly sorted inputs.
//! - **Radix Sort**: inputs whose sample holds no negative keys.
//! - **Quicksort**: everything else, and the fallback whenever merge or radix
//!   sort cannot run.
//!
//! The main entry points are [`adasort`] and [`Sorter::sort`].

use crate::analysis::analyze;
use crate::core::{Key, Route, SortConfig, Strategy};
use crate::error::SortError;
use crate::insertion::insertion_sort;
use crate::merge::merge_sort;
use crate::quick::quick_sort;
use crate::radix::radix_sort;
use log::{debug, warn};

/// Sorts `data` in place with the default [`SortConfig`] and returns the route taken.
///
/// # Examples
///
/// ```
/// use adasort::adasort;
/// use adasort::core::{Route, Strategy};
///
/// let mut data = vec![1, 2, 3, 10, 5, 6, 7, 8, 9, 4, 11, 12];
/// let route = adasort(&mut data);
///
/// assert_eq!(data, (1..=12).collect::<Vec<_>>());
/// assert_eq!(route, Route::Insertion); // 12 < 32, analysis is skipped
/// ```
pub fn adasort(data: &mut [Key]) -> Route {
    Sorter::default().sort(data)
}

/// Dispatcher bound to a validated [`SortConfig`].
///
/// Holds no state besides the configuration, so one `Sorter` can be shared
/// freely and used on any number of disjoint buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sorter {
    config: SortConfig,
}

impl Sorter {
    /// Creates a sorter after checking `config` with [`SortConfig::validate`].
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `data` in ascending order and returns the route taken.
    ///
    /// Never fails: when merge or radix sort cannot run, the input is left
    /// untouched by them and quicksort finishes the job instead.
    pub fn sort(&self, data: &mut [Key]) -> Route {
        let len = data.len();
        if len <= 1 {
            return Route::Trivial;
        }

        let route = if len < self.config.insertion_threshold {
            insertion_sort(data);
            Route::Insertion
        } else {
            let strategy = analyze(data, &self.config);
            Route::Analyzed(self.run(strategy, data))
        };

        debug!("sorted {len} keys via {route}");
        route
    }

    /// Runs `strategy` over the whole slice and returns the strategy that
    /// actually produced the result.
    fn run(&self, strategy: Strategy, data: &mut [Key]) -> Strategy {
        let outcome = match strategy {
            Strategy::MergeSort => merge_sort(data),
            Strategy::RadixSort => radix_sort(data).map(|_| ()),
            Strategy::QuickSort => {
                quick_sort(data, self.config.insertion_threshold);
                return Strategy::QuickSort;
            }
        };

        match outcome {
            Ok(()) => strategy,
            Err(err) => {
                // Negative keys past the sample end up here, as does a failed
                // scratch reservation. Either way `data` is still unmodified.
                warn!("{strategy} unavailable ({err}), falling back to quicksort");
                quick_sort(data, self.config.insertion_threshold);
                Strategy::QuickSort
            }
        }
    }
}
