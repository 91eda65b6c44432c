//! Input patterns for testing and benchmarking the queue and its strategies.
//!
//! All generators draw from one seed per process, see [`random_init_seed`], so a failing run can be
//! repeated by printing the seed.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Alphanumeric, Uniform};
use rand::prelude::*;

// --- Public ---

pub fn random(size: usize) -> Vec<i64> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seed();

    (0..size).map(|_| rng.gen::<i64>()).collect()
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i64>
where
    R: Into<Uniform<i64>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    let dist: Uniform<i64> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Values in `0..i64::MAX`, what radix sort accepts.
pub fn random_non_negative(size: usize) -> Vec<i64> {
    random_uniform(size, 0..i64::MAX)
}

pub fn all_equal(size: usize) -> Vec<i64> {
    // ......
    // ::::::

    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i64> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i64).collect()
}

pub fn descending(size: usize) -> Vec<i64> {
    // :.
    // :::.
    // :::::.

    (0..size as i64).rev().collect()
}

/// Ascending with `swap_count` random adjacent pairs swapped.
pub fn nearly_sorted(size: usize, swap_count: usize) -> Vec<i64> {
    //     .:
    //   .::.
    // .:::::

    let mut vals = ascending(size);
    if size < 2 {
        return vals;
    }

    let mut rng = new_seed();
    for _ in 0..swap_count {
        let i = rng.gen_range(0..size - 1);
        vals.swap(i, i + 1);
    }

    vals
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i64> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i64> {
    //   .:.
    // .:::::.

    let mut vals = random(size);

    let (first_half, second_half) = vals.split_at_mut(size / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Alphanumeric strings of length 1 to 16.
pub fn random_strings(size: usize) -> Vec<String> {
    let mut rng = new_seed();

    (0..size)
        .map(|_| {
            let len = rng.gen_range(1..=16);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// The seed of this process, created on first use. With [`disable_fixed_seed`] every call returns a
/// fresh one.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
