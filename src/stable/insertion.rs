//! Classic shift insertion sort.
//!
//! Stable, *O*(*n*) on already sorted input and *O*(*n*^2) in the worst case. Besides being a
//! strategy of its own it is the small-input base case of introsort and timsort-lite.

sort_impl!("insertion_stable");

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    insertion_sort_shift_left(v, 1, is_less);
}

/// Sort `v` assuming `v[..offset]` is already sorted.
pub(crate) fn insertion_sort_shift_left<T, F>(v: &mut [T], offset: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // This would be a logic bug.
    assert!(offset != 0 && offset <= len);

    // Shift each element of the unsorted region v[i..] as far left as is needed to make v sorted.
    for i in offset..len {
        insert_tail(&mut v[..=i], is_less);
    }
}

/// Inserts `v[v.len() - 1]` into pre-sorted sequence `v[..v.len() - 1]` so that whole `v[..]`
/// becomes sorted.
///
/// The tail only moves past elements it is strictly less than, which keeps equal elements in their
/// original order.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let tail = v.len() - 1;

    let mut hole = tail;
    while hole > 0 && is_less(&v[tail], &v[hole - 1]) {
        hole -= 1;
    }

    // Everything in v[hole..tail] moves one to the right and the tail lands in the hole.
    v[hole..].rotate_right(1);
}
