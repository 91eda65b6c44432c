//! Unstable engine algorithms. Equal elements may be reordered.

pub mod heapsort;
pub mod introsort;
pub mod quicksort;
