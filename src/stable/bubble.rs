use std::cmp::Ordering;

use crate::sorted::is_sorted_by_less;

/// Sorts the slice with bubble sort, preserving the order of equal elements.
///
/// Already sorted input is detected with a single scan, otherwise passes stop as soon as one of
/// them performs no swap. *O*(*n*^2) worst-case, does not allocate.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if is_sorted_by_less(v, is_less) {
        return;
    }

    let len = v.len();

    for i in 0..len {
        let mut swapped = false;

        // After pass i the largest i + 1 elements sit at the end of v.
        for j in 1..(len - i) {
            if is_less(&v[j], &v[j - 1]) {
                v.swap(j - 1, j);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
