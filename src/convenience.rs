//! Constructors for common element types in their natural order.

use crate::pqueue::NaturalPQueue;

fn natural_less<T: PartialOrd>(a: &T, b: &T) -> bool {
    a < b
}

impl NaturalPQueue<i64> {
    pub fn ints(data: &[i64]) -> Self {
        Self::new(data.iter().copied(), natural_less::<i64>)
    }
}

impl NaturalPQueue<f64> {
    /// NaN is incomparable to everything, which breaks the strict weak order. Inputs containing NaN
    /// come out in an unspecified order.
    pub fn floats(data: &[f64]) -> Self {
        Self::new(data.iter().copied(), natural_less::<f64>)
    }
}

impl NaturalPQueue<String> {
    pub fn strings<S: AsRef<str>>(data: &[S]) -> Self {
        Self::new(
            data.iter().map(|s| s.as_ref().to_owned()),
            natural_less::<String>,
        )
    }
}

impl NaturalPQueue<Vec<u8>> {
    /// Lexicographic byte order, a proper prefix sorts first.
    pub fn bytes<B: AsRef<[u8]>>(data: &[B]) -> Self {
        Self::new(
            data.iter().map(|b| b.as_ref().to_vec()),
            natural_less::<Vec<u8>>,
        )
    }
}

impl NaturalPQueue<Vec<char>> {
    /// Lexicographic code point order, a proper prefix sorts first.
    pub fn runes<R: AsRef<[char]>>(data: &[R]) -> Self {
        Self::new(
            data.iter().map(|r| r.as_ref().to_vec()),
            natural_less::<Vec<char>>,
        )
    }
}
