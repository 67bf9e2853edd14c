use std::cmp::Ordering;
use std::mem;

use tracing::{debug, trace};

use crate::stable::{bubble, insertion, merge};
use crate::unstable::selection;
use crate::{SortAlgorithm, SortError};

/// Sorts a borrowed slice in place with a selectable algorithm.
///
/// The slice and the algorithm can both be replaced between calls to [`sort`](Self::sort), and
/// the sorter can be reused any number of times. Sorting `[5, 3, 1, 4, 2]` with any algorithm
/// leaves `[1, 2, 3, 4, 5]` in the borrowed slice, nothing new is allocated for the result.
#[derive(Debug)]
pub struct ArraySorter<'a, T> {
    array: &'a mut [T],
    algorithm: SortAlgorithm,
}

impl<'a, T> ArraySorter<'a, T> {
    /// Creates a sorter using [`SortAlgorithm::Insertion`].
    pub fn new(array: &'a mut [T]) -> Self {
        Self::with_algorithm(array, SortAlgorithm::default())
    }

    pub fn with_algorithm(array: &'a mut [T], algorithm: SortAlgorithm) -> Self {
        Self { array, algorithm }
    }

    /// Returns a builder for cases where the array or the algorithm may be absent.
    pub fn builder() -> ArraySorterBuilder<'a, T> {
        ArraySorterBuilder::default()
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        trace!(from = %self.algorithm, to = %algorithm, "set sort algorithm");
        self.algorithm = algorithm;
    }

    /// Replaces the algorithm, failing with [`SortError::InvalidArgument`] if it is `None`.
    ///
    /// On failure the previous algorithm is kept.
    pub fn try_set_algorithm(&mut self, algorithm: Option<SortAlgorithm>) -> Result<(), SortError> {
        let algorithm = algorithm.ok_or(SortError::InvalidArgument("algorithm can't be absent"))?;
        self.set_algorithm(algorithm);

        Ok(())
    }

    /// Replaces the algorithm by name, see [`SortAlgorithm`]'s `FromStr` implementation for the
    /// accepted spellings.
    pub fn set_algorithm_by_name(&mut self, name: &str) -> Result<(), SortError> {
        let algorithm = name.parse()?;
        self.set_algorithm(algorithm);

        Ok(())
    }

    pub fn array(&self) -> &[T] {
        &*self.array
    }

    pub fn array_mut(&mut self) -> &mut [T] {
        &mut *self.array
    }

    /// Replaces the held array and returns the previous one.
    pub fn set_array(&mut self, array: &'a mut [T]) -> &'a mut [T] {
        trace!(len = array.len(), "set array");
        mem::replace(&mut self.array, array)
    }

    pub fn into_array(self) -> &'a mut [T] {
        self.array
    }

    /// Sorts the held array in place, using the order induced by `compare`.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.dispatch(&mut |a, b| compare(a, b) == Ordering::Less);
    }

    fn dispatch<F>(&mut self, is_less: &mut F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        debug!(algorithm = %self.algorithm, len = self.array.len(), "sorting array");

        let v = &mut *self.array;
        match self.algorithm {
            SortAlgorithm::Insertion => insertion::insertion_sort(v, is_less),
            SortAlgorithm::Bubble => bubble::bubble_sort(v, is_less),
            SortAlgorithm::Selection => selection::selection_sort(v, is_less),
            SortAlgorithm::Merge => merge::merge_sort(v, is_less),
        }
    }
}

impl<T> ArraySorter<'_, T>
where
    T: Ord,
{
    /// Sorts the held array in place with the selected algorithm.
    pub fn sort(&mut self) {
        self.dispatch(&mut |a, b| a.lt(b));
    }
}

/// Builds an [`ArraySorter`] from optional parts.
#[derive(Debug)]
pub struct ArraySorterBuilder<'a, T> {
    array: Option<&'a mut [T]>,
    algorithm: Option<SortAlgorithm>,
}

impl<T> Default for ArraySorterBuilder<'_, T> {
    fn default() -> Self {
        Self {
            array: None,
            algorithm: None,
        }
    }
}

impl<'a, T> ArraySorterBuilder<'a, T> {
    pub fn array(mut self, array: &'a mut [T]) -> Self {
        self.array = Some(array);
        self
    }

    /// Sets the array from a value that may be absent. `None` clears a previously given array, and
    /// [`build`](Self::build) then fails with [`SortError::InvalidArgument`].
    pub fn maybe_array(mut self, array: Option<&'a mut [T]>) -> Self {
        self.array = array;
        self
    }

    pub fn algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Fails with [`SortError::InvalidArgument`] if no array was given. A missing algorithm
    /// falls back to [`SortAlgorithm::Insertion`].
    pub fn build(self) -> Result<ArraySorter<'a, T>, SortError> {
        let array = self
            .array
            .ok_or(SortError::InvalidArgument("array must be present"))?;

        Ok(ArraySorter::with_algorithm(
            array,
            self.algorithm.unwrap_or_default(),
        ))
    }
}
