//! Stable engine algorithms, elements that compare equal keep their relative order.

pub mod insertion;
pub mod merge;
pub mod timsort_lite;
