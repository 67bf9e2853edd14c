//! Sorts slices in place with a caller-selected textbook algorithm.
//!
//! [`ArraySorter`] wraps a `&mut [T]` together with a [`SortAlgorithm`] and dispatches
//! [`ArraySorter::sort`] to one of the implementations in [`stable`] and [`unstable`]. The
//! implementations can also be called directly, and [`is_sorted`] is available as a standalone
//! predicate.

mod algorithm;
mod error;
mod sorted;
mod sorter;

pub mod stable;
pub mod unstable;

pub use algorithm::SortAlgorithm;
pub use error::SortError;
pub use sorted::{is_sorted, is_sorted_by};
pub use sorter::{ArraySorter, ArraySorterBuilder};
