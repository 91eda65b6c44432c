//! Introspective sort: quicksort that bails out to heapsort once a recursion path got too deep, and
//! finishes small ranges with insertion sort.
//!
//! Shares the Lomuto partition with [`super::quicksort`], so it inherits its pivot choice. The depth
//! budget of `2 * floor(log2(len))` partitions per path caps the worst case at *O*(*n* \*
//! log(*n*)).

use crate::stable::insertion;
use crate::unstable::{heapsort, quicksort};

sort_impl!("introsort_unstable");

/// Ranges of at most this many elements are insertion sorted.
pub const SMALL_SORT_THRESHOLD: usize = 16;

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Presorted input is left as is, equal elements included.
    if v.windows(2).all(|w| !is_less(&w[1], &w[0])) {
        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    let limit = 2 * len.ilog2();

    introsort(v, limit, is_less);
}

fn introsort<T, F>(mut v: &mut [T], mut limit: u32, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= SMALL_SORT_THRESHOLD {
            insertion::sort_by(v, is_less);
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort::heapsort(v, is_less);
            return;
        }

        limit -= 1;

        let mid = quicksort::partition(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let (_pivot, right) = right.split_at_mut(1);

        // Both sides get the reduced budget. Recurse into the shorter one to keep the stack
        // shallow.
        if left.len() < right.len() {
            introsort(left, limit, is_less);
            v = right;
        } else {
            introsort(right, limit, is_less);
            v = left;
        }
    }
}
