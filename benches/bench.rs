use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use once_cell::sync::OnceCell;

use pqsort::stable::{insertion, merge, timsort_lite};
use pqsort::unstable::{heapsort, introsort, quicksort};
use pqsort::{patterns, PQueue, QueueMode, Sort, SortStrategy};

/// Substring filter on bench names, read once from `BENCH_FILTER`.
fn should_run_benchmark(name: &str) -> bool {
    static FILTER: OnceCell<Option<String>> = OnceCell::new();

    FILTER
        .get_or_init(|| env::var("BENCH_FILTER").ok())
        .as_ref()
        .map(|filter| name.contains(filter.as_str()))
        .unwrap_or(true)
}

fn batch_size(test_len: usize) -> BatchSize {
    if test_len > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    }
}

#[inline(never)]
fn bench_fn<S: Sort>(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i64>,
) {
    let bench_name = format!("{}-i64-{pattern_name}-{test_len}", S::name());
    if !should_run_benchmark(&bench_name) {
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched_ref(
            || pattern_provider(test_len),
            |test_data| {
                S::sort(black_box(test_data.as_mut_slice()));
                black_box(test_data); // side-effect
            },
            batch_size(test_len),
        )
    });
}

#[inline(never)]
fn bench_strategy(
    c: &mut Criterion,
    test_len: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i64>,
    strategy: SortStrategy,
) {
    let bench_name = format!("pqueue_{strategy}-i64-{pattern_name}-{test_len}");
    if !should_run_benchmark(&bench_name) {
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched_ref(
            || PQueue::ints(&pattern_provider(test_len)),
            |pq| {
                pq.sort_with_strategy(black_box(strategy));
                black_box(pq); // side-effect
            },
            batch_size(test_len),
        )
    });
}

#[inline(never)]
fn bench_push_pop(c: &mut Criterion, test_len: usize, mode: QueueMode) {
    let bench_name = format!("pqueue_push_pop-{mode:?}-i64-random-{test_len}");
    if !should_run_benchmark(&bench_name) {
        return;
    }

    c.bench_function(&bench_name, |b| {
        b.iter_batched(
            || patterns::random(test_len),
            |test_data| {
                let mut pq = PQueue::with_mode(Vec::new(), |a: &i64, b: &i64| a < b, mode);
                for val in test_data {
                    pq.push(val);
                }
                while let Ok(val) = pq.pop() {
                    black_box(val);
                }
            },
            batch_size(test_len),
        )
    });
}

fn bench_patterns(c: &mut Criterion, test_len: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i64>)> = vec![
        ("random", patterns::random),
        ("random_non_negative", patterns::random_non_negative),
        ("random_d1000", |size| patterns::random_uniform(size, 0..1000)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("nearly_sorted", |size| patterns::nearly_sorted(size, size / 50)),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_len < 3 && *pattern_name != "random" {
            continue;
        }

        // Quadratic worst cases would dominate the run time.
        if test_len <= 10_000 {
            bench_fn::<insertion::SortImpl>(c, test_len, pattern_name, pattern_provider);
            bench_fn::<quicksort::SortImpl>(c, test_len, pattern_name, pattern_provider);
        }

        bench_fn::<merge::SortImpl>(c, test_len, pattern_name, pattern_provider);
        bench_fn::<timsort_lite::SortImpl>(c, test_len, pattern_name, pattern_provider);
        bench_fn::<introsort::SortImpl>(c, test_len, pattern_name, pattern_provider);
        bench_fn::<heapsort::SortImpl>(c, test_len, pattern_name, pattern_provider);

        for strategy in [SortStrategy::Auto, SortStrategy::Radix, SortStrategy::Counting] {
            bench_strategy(c, test_len, pattern_name, pattern_provider, strategy);
        }
    }
}

fn ensure_true_random() {
    // Ensure that random vecs are actually different.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [0, 1, 2, 8, 16, 17, 32, 33, 50, 101, 500, 1_000, 1_001, 10_000, 100_000];

    patterns::disable_fixed_seed();
    ensure_true_random();

    for test_len in test_sizes {
        bench_patterns(c, test_len);

        if test_len <= 10_000 {
            bench_push_pop(c, test_len, QueueMode::Linear);
        }
        bench_push_pop(c, test_len, QueueMode::Heap);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
