//! In-place heapsort, the guaranteed *O*(*n* \* log(*n*)) fallback of introsort.
//!
//! The sift helpers are shared with the heap mode of [`crate::PQueue`], which keeps a min-heap by
//! handing them a reversed comparison.

sort_impl!("heapsort_unstable");

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    heapsort(v, is_less);
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
pub(crate) fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Build the heap in linear time.
    heapify(v, is_less);

    // Pop maximal elements from the heap.
    for i in (1..v.len()).rev() {
        v.swap(0, i);
        sift_down(&mut v[..i], 0, is_less);
    }
}

/// Rearranges `v` into a binary heap with the `is_less` greatest element at the root.
pub(crate) fn heapify<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in (0..v.len() / 2).rev() {
        sift_down(v, i, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
pub(crate) fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(&v[node], &v[child]) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        v.swap(node, child);
        node = child;
    }
}

/// Moves `v[node]` up until its parent is not less than it.
pub(crate) fn sift_up<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while node > 0 {
        let parent = (node - 1) / 2;
        if !is_less(&v[parent], &v[node]) {
            break;
        }

        v.swap(parent, node);
        node = parent;
    }
}
