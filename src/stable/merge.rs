//! Top-down recursive merge sort.
//!
//! Allocates one auxiliary buffer sized to the whole input up front and reuses it for every merge.
//! Recursion depth is `ceil(log2(len))`.

sort_impl!("merge_stable");

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    if len < 2 {
        // These inputs are always sorted.
        return;
    }

    let mut buf = Vec::with_capacity(len);
    merge_sort(v, &mut buf, is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: &mut Vec<T>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);
    merge(v, mid, buf, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// `buf` is cleared first, its capacity should be at least `v.len()` to avoid reallocation.
pub(crate) fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut Vec<T>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(mid <= v.len());

    buf.clear();
    buf.extend_from_slice(v);

    let (left, right) = buf.split_at(mid);
    let mut l = 0;
    let mut r = 0;

    for out in v.iter_mut() {
        // Consume the lesser side.
        // If equal, prefer the left run to maintain stability.
        let take_right = l == left.len() || (r < right.len() && is_less(&right[r], &left[l]));

        if take_right {
            out.clone_from(&right[r]);
            r += 1;
        } else {
            out.clone_from(&left[l]);
            l += 1;
        }
    }
}
