//! A container that is both a bag with minimum queries and an adaptive sorter.
//!
//! [`PQueue`] owns a buffer of elements and a strict weak order over them. It answers
//! push / pop-minimum / peek-minimum and can sort its whole buffer in place, picking one of seven
//! engine algorithms from the length of the data, how presorted it is and the coarse
//! [`DataType`] of the element type.
//!
//! The engine algorithms are usable on their own, each module exposes `sort_by` taking an
//! `is_less` closure, and the comparison based ones implement [`Sort`] via their `SortImpl`.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort_by(v, &mut |a: &T, b: &T| a.lt(b));
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> bool,
            {
                sort_by(v, is_less);
            }
        }
    };
}

/// Common interface of the comparison based engine algorithms.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(v: &mut [T], is_less: &mut F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool;
}

pub mod classify;
pub mod error;
pub mod other;
pub mod patterns;
pub mod pqueue;
pub mod stable;
pub mod strategy;
pub mod unstable;

mod convenience;

pub use classify::{Classify, DataType};
pub use error::PQueueError;
pub use pqueue::{PQueue, QueueMode};
pub use strategy::{SelectorConfig, SortStrategy};
