use std::cmp::Ordering;
use std::mem;
use std::ptr;

/// Sorts the slice with top-down merge sort, preserving the order of equal elements.
///
/// *O*(*n* \* log(*n*)) worst-case. Allocates a single scratch buffer of `v.len()` elements which
/// is reused by every merge.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();

    if len < 2 {
        return;
    }

    // The buffer is only used as raw storage, its len stays 0 so nothing in it is ever dropped.
    let mut buf = Vec::<T>::with_capacity(len);

    merge_sort_range(v, buf.as_mut_ptr(), is_less);
}

fn merge_sort_range<T, F>(v: &mut [T], scratch: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    // For the inclusive range [l, r] the middle element (l + r) / 2 ends the left half.
    let mid = (len - 1) / 2 + 1;

    merge_sort_range(&mut v[..mid], scratch, is_less);
    merge_sort_range(&mut v[mid..], scratch, is_less);

    // SAFETY: `scratch` is valid for at least `v.len()` writes, it was allocated for the outermost
    // slice and every sub-range is shorter. 0 < mid < len.
    unsafe {
        merge(v, mid, scratch, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` into `v`.
///
/// Both runs are copied into `scratch` first and then taken front to front back into `v`. On ties
/// the left run goes first.
///
/// # Safety
///
/// `scratch` must be valid for `v.len()` writes and must not overlap `v`. `mid` must be in
/// `1..v.len()`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, scratch: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let v_ptr = v.as_mut_ptr();

    debug_assert!(mid > 0 && mid < len);

    // SAFETY: see function safety comment. Every element of `v` is bitwise copied into `scratch`
    // exactly once and copied back exactly once, either by the loop or by dropping `state`.
    unsafe {
        ptr::copy_nonoverlapping(v_ptr, scratch, len);

        // If `is_less` panics, `state` gets dropped and copies the unconsumed rest of both runs
        // back into `v`, so `v` still holds every object it initially held exactly once.
        let mut state = MergeState {
            left: scratch,
            left_end: scratch.add(mid),
            right: scratch.add(mid),
            right_end: scratch.add(len),
            dest: v_ptr,
        };

        while state.left != state.left_end && state.right != state.right_end {
            let take_right = is_less(&*state.right, &*state.left);

            let src = if take_right { state.right } else { state.left };
            ptr::copy_nonoverlapping(src, state.dest, 1);

            if take_right {
                state.right = state.right.add(1);
            } else {
                state.left = state.left.add(1);
            }
            state.dest = state.dest.add(1);
        }
        // `state` gets dropped and drains whichever run still has elements into `v`.
    }
}

// When dropped, copies `left..left_end` and then `right..right_end` into `dest`.
struct MergeState<T> {
    left: *const T,
    left_end: *const T,
    right: *const T,
    right_end: *const T,
    dest: *mut T,
}

impl<T> Drop for MergeState<T> {
    fn drop(&mut self) {
        // SAFETY: the remaining elements of both runs add up to the number of slots left between
        // `dest` and the end of the merged range. Scratch and destination never overlap.
        unsafe {
            let left_len = self.left_end.offset_from(self.left) as usize;
            ptr::copy_nonoverlapping(self.left, self.dest, left_len);

            let right_len = self.right_end.offset_from(self.right) as usize;
            ptr::copy_nonoverlapping(self.right, self.dest.add(left_len), right_len);
        }
    }
}
