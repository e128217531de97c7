//! # Adasort
//!
//! `adasort` is an adaptive sorting dispatcher for integer keys. Instead of committing to a
//! single algorithm, it inspects a bounded sample of the input, classifies its shape, and
//! routes the full sort to the candidate expected to perform best for that shape.
//!
//! ## Key Features
//!
//! - **Cheap Analysis**: At most the first 100 keys are inspected, in one scan, plus a sorted
//!   copy of the sample only when negatives rule out radix sort.
//! - **Adaptive Strategy**: Chooses between **Merge Sort** (nearly sorted data), **Radix Sort**
//!   (non-negative keys) and **Quicksort** (everything else). Inputs shorter than the insertion
//!   threshold skip analysis and use **Insertion Sort** directly.
//! - **Never Half-Sorted**: Auxiliary buffers are reserved before the input is touched. If a
//!   reservation fails, or radix sort meets a negative key outside the sample, the dispatcher
//!   falls back to quicksort, which needs no extra memory.
//! - **Tunable**: Every threshold lives in [`SortConfig`] and can be changed per [`Sorter`].
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use adasort::adasort;
//!
//! let mut data: Vec<i32> = (0..1000).rev().collect();
//! let route = adasort(&mut data);
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! println!("sorted via {route}");
//! ```
//!
//! ### Custom Thresholds
//!
//! ```rust
//! use adasort::{Route, SortConfig, Sorter, Strategy};
//!
//! let sorter = Sorter::new(SortConfig::default().with_insertion_threshold(4)).unwrap();
//!
//! let mut data = vec![9, -3, 5, 2, 6, 8, -6, 1, 3, 4, 15, 0, -10];
//! assert_eq!(sorter.sort(&mut data), Route::Analyzed(Strategy::QuickSort));
//! assert_eq!(data, vec![-10, -6, -3, 0, 1, 2, 3, 4, 5, 6, 8, 9, 15]);
//! ```
//!
//! ### Standalone Algorithms
//!
//! The four algorithms are public. Insertion, merge and quick sort accept any `T: Ord`;
//! radix sort reports negative keys as [`SortError::NegativeKey`] rather than misordering them.
//!
//! ## Performance Characteristics
//!
//! - **Merge Sort**: O(N log N), stable, N auxiliary elements.
//! - **Radix Sort**: O(d·N) where d is the decimal digit count of the maximum key, N auxiliary elements.
//! - **Quicksort**: O(N log N) expected, O(N²) on adversarial input (fixed last-element pivot),
//!   no auxiliary memory and O(log N) stack.
//! - **Insertion Sort**: O(N²), used only below the insertion threshold.
//!
//! Everything runs on the caller's thread. There is no global state, so concurrent calls on
//! disjoint buffers are safe.

pub mod algo;
pub mod analysis;
pub mod core;
pub mod error;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;

pub use algo::{Sorter, adasort};
pub use core::{Key, Route, SortConfig, Strategy};
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{Sorter, adasort};
    pub use crate::core::{Key, Route, SortConfig, Strategy};
    pub use crate::error::SortError;
}
