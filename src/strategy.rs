//! Sorting strategies and the heuristic that picks one.

use std::fmt;

use log::trace;

use crate::classify::DataType;
use crate::other::key_min_max;

/// Which engine algorithm a sort call uses. Passed per call, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Let [`choose_optimal_strategy`] decide.
    Auto,
    /// Integer keys only, quicksort otherwise.
    Radix,
    /// Integer keys only, quicksort otherwise or if the key range is too wide.
    Counting,
    Insertion,
    TimsortLite,
    Introsort,
    Merge,
    Quick,
}

impl SortStrategy {
    /// Every concrete strategy, i.e. everything but [`SortStrategy::Auto`].
    pub const ALL: [SortStrategy; 7] = [
        SortStrategy::Radix,
        SortStrategy::Counting,
        SortStrategy::Insertion,
        SortStrategy::TimsortLite,
        SortStrategy::Introsort,
        SortStrategy::Merge,
        SortStrategy::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortStrategy::Auto => "auto",
            SortStrategy::Radix => "radix",
            SortStrategy::Counting => "counting",
            SortStrategy::Insertion => "insertion",
            SortStrategy::TimsortLite => "timsort_lite",
            SortStrategy::Introsort => "introsort",
            SortStrategy::Merge => "merge",
            SortStrategy::Quick => "quick",
        }
    }

    /// Whether elements that compare equal keep their relative order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortStrategy::Insertion | SortStrategy::TimsortLite | SortStrategy::Merge
        )
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Thresholds of the selection heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Inputs up to this length are always insertion sorted.
    pub small_len: usize,
    /// An input is nearly sorted if it has at most `max(1, len / near_sorted_divisor)` adjacent
    /// inversions.
    pub near_sorted_divisor: usize,
    /// Integer inputs longer than this go to counting or radix sort.
    pub integer_min_len: usize,
    /// Integer inputs with `max - min` up to this go to counting sort, wider ones to radix sort.
    pub counting_max_range: i128,
    /// Above this length introsort replaces timsort-lite for comparison heavy types.
    pub large_len: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            small_len: 16,
            near_sorted_divisor: 10,
            integer_min_len: 100,
            counting_max_range: 1000,
            large_len: 1000,
        }
    }
}

/// Picks a concrete strategy for sorting `v`. Never returns [`SortStrategy::Auto`].
///
/// The rules are checked in order, the first match wins:
/// 1. short inputs, insertion sort
/// 2. nearly sorted inputs, insertion sort
/// 3. long integer inputs, counting sort for narrow value ranges else radix sort
/// 4. text, introsort when long else timsort-lite
/// 5. sequences and arrays, merge sort
/// 6. records and trait objects, introsort when long else timsort-lite
/// 7. references, mappings, channels and functions, quicksort
/// 8. anything else, introsort when long else timsort-lite
pub fn choose_optimal_strategy<T, F, K>(
    v: &[T],
    is_less: &mut F,
    data_type: DataType,
    integer_key: K,
    config: &SelectorConfig,
) -> SortStrategy
where
    F: FnMut(&T, &T) -> bool,
    K: FnMut(&T) -> Option<i128>,
{
    let len = v.len();

    if len <= config.small_len {
        trace!("len {len} <= {}, picking insertion", config.small_len);
        return SortStrategy::Insertion;
    }

    if is_nearly_sorted(v, is_less, config.near_sorted_divisor) {
        trace!("len {len} nearly sorted, picking insertion");
        return SortStrategy::Insertion;
    }

    let is_long = len > config.large_len;

    let strategy = match data_type {
        DataType::Integer if len > config.integer_min_len => {
            if has_small_range(v, integer_key, config.counting_max_range) {
                SortStrategy::Counting
            } else {
                SortStrategy::Radix
            }
        }
        DataType::Sequence | DataType::Array => SortStrategy::Merge,
        DataType::Reference | DataType::Mapping | DataType::Channel | DataType::Function => {
            SortStrategy::Quick
        }
        // Text, records, trait objects and the rest share the length based split.
        _ if is_long => SortStrategy::Introsort,
        _ => SortStrategy::TimsortLite,
    };

    trace!("len {len} {data_type} data, picking {strategy}");

    strategy
}

/// Single pass over adjacent pairs, stops as soon as more than `max(1, len / divisor)` inversions
/// were seen.
///
/// Only neighbours are compared, so an input made of long sorted blocks in the wrong block order
/// is nearly sorted if it has few enough block boundaries.
pub fn is_nearly_sorted<T, F>(v: &[T], is_less: &mut F, divisor: usize) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    let threshold = (v.len() / divisor.max(1)).max(1);

    let mut inversions = 0;
    for w in v.windows(2) {
        if is_less(&w[1], &w[0]) {
            inversions += 1;
            if inversions > threshold {
                return false;
            }
        }
    }

    true
}

fn has_small_range<T, K>(v: &[T], integer_key: K, max_range: i128) -> bool
where
    K: FnMut(&T) -> Option<i128>,
{
    match key_min_max(v, integer_key) {
        Some((min, max)) => max.checked_sub(min).is_some_and(|range| range <= max_range),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick<T: PartialOrd>(
        v: &[T],
        data_type: DataType,
        key: fn(&T) -> Option<i128>,
    ) -> SortStrategy {
        let config = SelectorConfig::default();
        choose_optimal_strategy(v, &mut |a: &T, b: &T| a < b, data_type, key, &config)
    }

    fn int_key(x: &i64) -> Option<i128> {
        Some(*x as i128)
    }

    fn no_key<T>(_: &T) -> Option<i128> {
        None
    }

    /// 0, len-1, 1, len-2, ... far from sorted, values in 0..len.
    fn zigzag(len: usize) -> Vec<i64> {
        (0..len)
            .map(|i| {
                let val = if i % 2 == 0 { i / 2 } else { len - 1 - i / 2 };
                val as i64
            })
            .collect()
    }

    #[test]
    fn nearly_sorted_threshold() {
        let mut v: Vec<i32> = (0..20).collect();
        let mut is_less = |a: &i32, b: &i32| a < b;
        assert!(is_nearly_sorted(&v, &mut is_less, 10));

        // 20 / 10 = 2 inversions are still fine, the third is one too many.
        v.swap(2, 3);
        v.swap(8, 9);
        assert!(is_nearly_sorted(&v, &mut is_less, 10));
        v.swap(14, 15);
        assert!(!is_nearly_sorted(&v, &mut is_less, 10));

        // Short inputs still get one inversion.
        assert!(is_nearly_sorted(&[2, 1, 3], &mut is_less, 10));
        assert!(!is_nearly_sorted(&[2, 1, 3, 0], &mut is_less, 10));
    }

    #[test]
    fn small_and_nearly_sorted() {
        assert_eq!(pick(&zigzag(16), DataType::Integer, int_key), SortStrategy::Insertion);

        let mut v: Vec<i64> = (0..500).collect();
        v.swap(10, 11);
        assert_eq!(pick(&v, DataType::Integer, int_key), SortStrategy::Insertion);
    }

    #[test]
    fn integers() {
        assert_eq!(pick(&zigzag(500), DataType::Integer, int_key), SortStrategy::Counting);

        let wide: Vec<i64> = zigzag(500).into_iter().map(|x| x * 1000).collect();
        assert_eq!(pick(&wide, DataType::Integer, int_key), SortStrategy::Radix);

        // Not long enough for the integer rule.
        assert_eq!(pick(&zigzag(100), DataType::Integer, int_key), SortStrategy::TimsortLite);

        // Without keys the range is unknown.
        assert_eq!(pick(&zigzag(500), DataType::Integer, no_key), SortStrategy::Radix);
    }

    #[test]
    fn by_data_type() {
        let short = zigzag(200);
        let long = zigzag(2000);

        assert_eq!(pick(&short, DataType::Text, no_key), SortStrategy::TimsortLite);
        assert_eq!(pick(&long, DataType::Text, no_key), SortStrategy::Introsort);
        assert_eq!(pick(&long, DataType::Sequence, no_key), SortStrategy::Merge);
        assert_eq!(pick(&short, DataType::Array, no_key), SortStrategy::Merge);
        assert_eq!(pick(&short, DataType::Record, no_key), SortStrategy::TimsortLite);
        assert_eq!(pick(&long, DataType::Interface, no_key), SortStrategy::Introsort);
        assert_eq!(pick(&long, DataType::Reference, no_key), SortStrategy::Quick);
        assert_eq!(pick(&short, DataType::Function, no_key), SortStrategy::Quick);
        assert_eq!(pick(&short, DataType::Float, no_key), SortStrategy::TimsortLite);
        assert_eq!(pick(&long, DataType::Generic, no_key), SortStrategy::Introsort);
    }
}
