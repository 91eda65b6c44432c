//! Basic quicksort with a Lomuto partition around the last element.
//!
//! Recursion only descends into the shorter partition, the longer one is handled by the loop, which
//! bounds the stack depth to *O*(log(*n*)) even for adversarial inputs. Time is still *O*(*n*^2) in
//! the worst case, e.g. for inputs with many equal elements.

sort_impl!("quicksort_unstable");

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort(v, is_less);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = partition(v, is_less);

        let (left, right) = v.split_at_mut(mid);
        let (_pivot, right) = right.split_at_mut(1);

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its last element and returns the final position of that pivot.
///
/// Every element the pivot is not less than, including the ones incomparable to it, ends up left of
/// the pivot, everything greater ends up right of it.
///
/// Panics if `v` is empty.
pub(crate) fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = v.len() - 1;
    let (rest, pivot_slot) = v.split_at_mut(pivot_pos);
    let pivot = &pivot_slot[0];

    let mut lt_count = 0;
    for r in 0..rest.len() {
        if !is_less(pivot, &rest[r]) {
            rest.swap(lt_count, r);
            lt_count += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(lt_count, pivot_pos);

    lt_count
}
