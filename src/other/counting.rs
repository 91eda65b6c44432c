//! Counting sort for integer keys packed into a small range.

use crate::other::{apply_permutation, collect_keys};

/// Largest `max - min` key distance counting sort accepts. The frequency table has one slot per
/// value in the range.
pub const MAX_RANGE: i128 = 10_000;

/// Sorts `v` ascending by `key`. Returns `false` without touching `v` if any element has no key or
/// the keys span more than [`MAX_RANGE`].
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by_key<T, K>(v: &mut [T], mut key: K) -> bool
where
    T: Clone,
    K: FnMut(&T) -> Option<i128>,
{
    let Some(keys) = collect_keys(v, &mut key) else {
        return false;
    };

    let (Some(&min), Some(&max)) = (keys.iter().min(), keys.iter().max()) else {
        // Empty.
        return true;
    };

    let range = match max.checked_sub(min) {
        Some(range) if range <= MAX_RANGE => range as usize,
        _ => return false,
    };

    if range == 0 {
        return true;
    }

    let slot = |k: i128| (k - min) as usize;

    let mut count = vec![0usize; range + 1];
    for &k in &keys {
        count[slot(k)] += 1;
    }

    // Turn the frequencies into the first output position of each value.
    let mut next = 0;
    for c in count.iter_mut() {
        let freq = *c;
        *c = next;
        next += freq;
    }

    let mut order = vec![0; keys.len()];
    for (i, &k) in keys.iter().enumerate() {
        let pos = &mut count[slot(k)];
        order[*pos] = i;
        *pos += 1;
    }

    apply_permutation(v, &order);

    true
}
