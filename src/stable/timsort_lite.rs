//! Run based adaptive merge sort, a much reduced TimSort.
//!
//! No galloping, no minimum run length and no merge-collapse invariants. One forward scan finds the
//! natural runs, then adjacent runs are merged pairwise, pass after pass, until a single run is
//! left. Inputs of at most [`MIN_MERGE`] elements go straight to insertion sort.

use crate::stable::{insertion, merge};

sort_impl!("timsort_lite_stable");

/// Inputs up to this length are insertion sorted.
pub const MIN_MERGE: usize = 32;

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= MIN_MERGE {
        insertion::sort_by(v, is_less);
        return;
    }

    let runs = find_runs(v, is_less);
    merge_runs(v, runs, is_less);
}

/// Scans `v` once and returns the run boundaries `[0, end_0, end_1, .., v.len()]`.
///
/// Descending runs are reversed in place, so every recorded run is non-decreasing afterwards.
fn find_runs<T, F>(v: &mut [T], is_less: &mut F) -> Vec<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut bounds = vec![0];

    let mut start = 0;
    while start < len {
        let (streak_len, was_reversed) = find_streak(&v[start..], is_less);
        let end = start + streak_len;

        if was_reversed {
            v[start..end].reverse();
        }

        bounds.push(end);
        start = end;
    }

    bounds
}

/// Finds a streak of presorted elements starting at the beginning of the slice. Returns the first
/// value that is not part of said streak, and a bool denoting wether the streak was reversed.
/// Streaks can be non-decreasing or strictly decreasing.
///
/// Only strictly decreasing streaks get reversed, reversing a streak holding equal elements would
/// swap their relative order.
fn find_streak<T, F>(v: &[T], is_less: &mut F) -> (usize, bool)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        return (len, false);
    }

    let mut end = 2;

    let assume_reverse = is_less(&v[1], &v[0]);

    if assume_reverse {
        while end < len && is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        (end, true)
    } else {
        while end < len && !is_less(&v[end], &v[end - 1]) {
            end += 1;
        }

        (end, false)
    }
}

/// Merges adjacent pairs of runs until one run covers all of `v`. An odd trailing run is carried
/// into the next pass unmerged.
fn merge_runs<T, F>(v: &mut [T], mut bounds: Vec<usize>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut buf = Vec::with_capacity(v.len());

    while bounds.len() > 2 {
        let run_count = bounds.len() - 1;
        let mut merged = Vec::with_capacity(run_count / 2 + 2);
        merged.push(0);

        for pair in bounds.windows(3).step_by(2) {
            let (start, mid, end) = (pair[0], pair[1], pair[2]);
            merge::merge(&mut v[start..end], mid - start, &mut buf, is_less);
            merged.push(end);
        }

        if run_count % 2 == 1 {
            merged.push(bounds[run_count]);
        }

        bounds = merged;
    }

    debug_assert!(bounds == [0, v.len()]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_cover_input() {
        let mut v = vec![1, 2, 3, 9, 7, 5, 5, 6, 0];
        let bounds = find_runs(&mut v, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(bounds, [0, 4, 6, 8, 9]);
        // The strictly descending streak [7, 5] got reversed.
        assert_eq!(v, [1, 2, 3, 9, 5, 7, 5, 6, 0]);
    }

    #[test]
    fn odd_run_count_carries_tail() {
        let mut v = vec![4, 5, 6, 1, 2, 3, 0];
        let bounds = vec![0, 3, 6, 7];
        merge_runs(&mut v, bounds, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6]);
    }
}
