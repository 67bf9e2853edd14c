//! Shared test tooling: input patterns and a property suite that runs against any [`Sort`].

use std::cmp::Ordering;

pub mod patterns;

/// A sort implementation under test.
pub trait Sort {
    /// Shown in failure output.
    fn name() -> String;

    /// Whether equal elements must keep their input order. Stability checks are skipped if not.
    fn is_stable() -> bool;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort<T: Ord>(v: &mut [T]) {
        Self::sort_by(v, T::cmp);
    }
}
