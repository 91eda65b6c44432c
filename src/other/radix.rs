//! Base 10, least significant digit first radix sort.
//!
//! Each pass is a stable counting sort on one decimal digit of the key, one pass per digit of the
//! largest key. The passes permute an index vector, the elements themselves are moved once at the
//! end.

use std::mem;

use crate::other::{apply_permutation, collect_keys};

const RADIX: u128 = 10;

/// Sorts `v` ascending by `key`. Returns `false` without touching `v` if any element has no key or
/// a negative key.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by_key<T, K>(v: &mut [T], mut key: K) -> bool
where
    T: Clone,
    K: FnMut(&T) -> Option<i128>,
{
    let Some(keys) = collect_keys(v, &mut key) else {
        return false;
    };

    // Digits of negative numbers have no meaningful LSD order.
    if keys.iter().any(|&k| k < 0) {
        return false;
    }

    let keys: Vec<u128> = keys.into_iter().map(|k| k as u128).collect();
    let max = keys.iter().copied().max().unwrap_or(0);

    if max == 0 {
        // Empty or all zero, already sorted.
        return true;
    }

    let len = v.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];

    let mut exp: u128 = 1;
    while max / exp > 0 {
        counting_pass(&keys, &order, &mut scratch, exp);
        mem::swap(&mut order, &mut scratch);

        exp = match exp.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }

    apply_permutation(v, &order);

    true
}

/// Stable counting sort of the indices in `src` by the decimal digit at `exp`, written to `dst`.
fn counting_pass(keys: &[u128], src: &[usize], dst: &mut [usize], exp: u128) {
    let digit = |i: usize| ((keys[i] / exp) % RADIX) as usize;

    let mut count = [0usize; RADIX as usize];
    for &i in src {
        count[digit(i)] += 1;
    }

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    // Walking backwards keeps equal digits in their previous order.
    for &i in src.iter().rev() {
        let d = digit(i);
        count[d] -= 1;
        dst[count[d]] = i;
    }
}
