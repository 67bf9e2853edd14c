use std::cmp::Ordering;

/// Sorts the slice with insertion sort, preserving the order of equal elements.
///
/// *O*(*n*^2) worst-case, *O*(*n*) if `v` is already sorted. Does not allocate.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let slot = find_slot(&v[..=i], is_less);

        // Moves the larger run v[slot..i] one step right and drops v[i] in front of it.
        if slot != i {
            v[slot..=i].rotate_right(1);
        }
    }
}

/// Index in `run[..run.len() - 1]` where the last element of `run` belongs.
///
/// Walks left past every predecessor that is strictly greater, so equal elements stay in front of
/// the new one. Nothing is moved while `is_less` runs, a panicking comparator leaves `run` as is.
fn find_slot<T, F>(run: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (new, sorted) = match run.split_last() {
        Some(split) => split,
        None => return 0,
    };

    let mut slot = sorted.len();
    while slot > 0 && is_less(new, &sorted[slot - 1]) {
        slot -= 1;
    }

    slot
}
