use std::cmp::Ordering;

/// Returns `true` if `v` is non-decreasing, i.e. no element is less than its predecessor.
///
/// Empty and single-element slices are always sorted.
#[inline]
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    is_sorted_by_less(v, &mut |a, b| a.lt(b))
}

/// Like [`is_sorted`], but with the order induced by `compare`.
#[inline]
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    is_sorted_by_less(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

pub(crate) fn is_sorted_by_less<T, F>(v: &[T], is_less: &mut F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    // Scans back to front and stops at the first descent.
    (1..v.len()).rev().all(|i| !is_less(&v[i], &v[i - 1]))
}
