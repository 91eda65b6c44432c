//! Integer key sorts that do not consult the comparison function.
//!
//! Both order elements by an `i128` key extracted per element and are only meaningful when that key
//! order agrees with the container's comparison, e.g. the natural order of a primitive integer.
//! Neither can sort every input: they report `false` and leave `v` untouched when a key is missing
//! or outside what they handle, and the caller picks a fallback.

pub mod counting;
pub mod radix;

/// Collects the key of every element, `None` if any element has no integer key.
pub(crate) fn collect_keys<T, K>(v: &[T], key: &mut K) -> Option<Vec<i128>>
where
    K: FnMut(&T) -> Option<i128>,
{
    v.iter().map(key).collect()
}

/// Smallest and largest key of `v`. `None` if `v` is empty or any element has no integer key.
pub fn key_min_max<T, K>(v: &[T], mut key: K) -> Option<(i128, i128)>
where
    K: FnMut(&T) -> Option<i128>,
{
    let mut iter = v.iter();
    let first = key(iter.next()?)?;

    iter.try_fold((first, first), |(min, max), elem| {
        let k = key(elem)?;
        Some((min.min(k), max.max(k)))
    })
}

/// Rewrites `v` so that position `i` holds the element previously at `order[i]`.
fn apply_permutation<T: Clone>(v: &mut [T], order: &[usize]) {
    debug_assert_eq!(v.len(), order.len());

    let permuted: Vec<T> = order.iter().map(|&i| v[i].clone()).collect();
    v.clone_from_slice(&permuted);
}
