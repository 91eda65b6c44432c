//! The priority queue container.

use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::classify::{infer_data_type, Classify, DataType};
use crate::error::PQueueError;
use crate::other::{counting, radix};
use crate::stable::{insertion, merge, timsort_lite};
use crate::strategy::{self, SelectorConfig, SortStrategy};
use crate::unstable::{heapsort, introsort, quicksort};

/// How `pop` and `peek` find the minimum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QueueMode {
    /// The buffer is an unordered bag. `push` is *O*(1), `pop` and `peek` scan all elements and
    /// resolve ties in favour of the first occurrence.
    #[default]
    Linear,
    /// The buffer is kept as a binary min-heap. `push` and `pop` are *O*(log(*n*)), `peek` is
    /// *O*(1). Which of several equal minima is returned is unspecified.
    Heap,
}

/// A queue ordered by the comparison `is_less`, which must be a strict weak order.
///
/// `pop` and `peek` return the minimum, `sort` rearranges the whole buffer in ascending order with
/// an automatically chosen algorithm.
#[derive(Clone)]
pub struct PQueue<T, F> {
    data: Vec<T>,
    is_less: F,
    data_type: DataType,
    integer_key: fn(&T) -> Option<i128>,
    mode: QueueMode,
    config: SelectorConfig,
}

/// Queue using a plain function as comparison, the type produced by the convenience constructors.
pub type NaturalPQueue<T> = PQueue<T, fn(&T, &T) -> bool>;

impl<T, F> PQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates a queue holding the elements of `data`, classified as `T::DATA_TYPE` unless `data`
    /// is empty.
    pub fn new<I>(data: I, is_less: F) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Classify,
    {
        Self::with_mode(data, is_less, QueueMode::Linear)
    }

    pub fn with_mode<I>(data: I, is_less: F, mode: QueueMode) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Classify,
    {
        let data: Vec<T> = data.into_iter().collect();
        let data_type = infer_data_type(&data);

        Self::from_parts(data, is_less, data_type, T::integer_key, mode)
    }

    /// Creates a queue for element types without a [`Classify`] impl, or to override it.
    ///
    /// There is no integer key, radix and counting sort fall back to quicksort even for
    /// [`DataType::Integer`].
    pub fn with_data_type<I>(data: I, is_less: F, data_type: DataType) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = data.into_iter().collect();

        Self::from_parts(data, is_less, data_type, no_integer_key, QueueMode::Linear)
    }

    fn from_parts(
        data: Vec<T>,
        is_less: F,
        data_type: DataType,
        integer_key: fn(&T) -> Option<i128>,
        mode: QueueMode,
    ) -> Self {
        let mut pq = Self {
            data,
            is_less,
            data_type,
            integer_key,
            mode,
            config: SelectorConfig::default(),
        };

        if mode == QueueMode::Heap {
            pq.rebuild_heap();
        }

        pq
    }

    /// Replaces the thresholds used by [`SortStrategy::Auto`].
    pub fn with_config(mut self, config: SelectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: SelectorConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn mode(&self) -> QueueMode {
        self.mode
    }

    /// Switches the queue mode. Switching to [`QueueMode::Heap`] heapifies the buffer in *O*(*n*).
    pub fn set_mode(&mut self, mode: QueueMode) {
        if mode == QueueMode::Heap && self.mode != QueueMode::Heap {
            self.rebuild_heap();
        }

        self.mode = mode;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn data_type_name(&self) -> &'static str {
        self.data_type.name()
    }

    /// Adds `item`. When the buffer is full its capacity doubles, starting at 1.
    pub fn push(&mut self, item: T) {
        if self.data.len() == self.data.capacity() {
            let new_capacity = (self.data.capacity() * 2).max(1);
            self.data.reserve_exact(new_capacity - self.data.len());
        }

        self.data.push(item);

        if self.mode == QueueMode::Heap {
            let is_less = &self.is_less;
            let last = self.data.len() - 1;
            heapsort::sift_up(&mut self.data, last, &mut |a: &T, b: &T| is_less(b, a));
        }
    }

    /// Removes and returns the minimum.
    ///
    /// In [`QueueMode::Linear`] the last element takes the place of the removed one.
    pub fn pop(&mut self) -> Result<T, PQueueError> {
        let min_idx = self.min_index()?;
        let item = self.data.swap_remove(min_idx);

        if self.mode == QueueMode::Heap && !self.data.is_empty() {
            let is_less = &self.is_less;
            heapsort::sift_down(&mut self.data, 0, &mut |a: &T, b: &T| is_less(b, a));
        }

        Ok(item)
    }

    /// Returns the minimum without removing it.
    pub fn peek(&self) -> Result<&T, PQueueError> {
        self.min_index().map(|i| &self.data[i])
    }

    /// Picks the strategy [`SortStrategy::Auto`] would use for the current contents.
    pub fn choose_optimal_strategy(&self) -> SortStrategy {
        let is_less = &self.is_less;

        strategy::choose_optimal_strategy(
            &self.data,
            &mut |a: &T, b: &T| is_less(a, b),
            self.data_type,
            self.integer_key,
            &self.config,
        )
    }

    fn min_index(&self) -> Result<usize, PQueueError> {
        if self.data.is_empty() {
            return Err(PQueueError::EmptyQueue);
        }

        if self.mode == QueueMode::Heap {
            return Ok(0);
        }

        let mut min_idx = 0;
        for i in 1..self.data.len() {
            if (self.is_less)(&self.data[i], &self.data[min_idx]) {
                min_idx = i;
            }
        }

        Ok(min_idx)
    }

    fn rebuild_heap(&mut self) {
        let is_less = &self.is_less;
        heapsort::heapify(&mut self.data, &mut |a: &T, b: &T| is_less(b, a));
    }
}

impl<T, F> PQueue<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    /// Like [`PQueue::peek`] but returns a copy.
    pub fn peek_cloned(&self) -> Result<T, PQueueError> {
        self.peek().cloned()
    }

    /// Sorts the buffer ascending, equivalent to `sort_with_strategy(SortStrategy::Auto)`.
    pub fn sort(&mut self) {
        self.sort_with_strategy(SortStrategy::Auto);
    }

    /// Sorts the buffer ascending with `strategy`.
    ///
    /// [`SortStrategy::Radix`] and [`SortStrategy::Counting`] order by the integer key instead of
    /// `is_less`. They only run for [`DataType::Integer`] queues whose elements all have a key (and
    /// for radix, no negative one, for counting, a key range of at most
    /// [`counting::MAX_RANGE`]), otherwise quicksort is used.
    pub fn sort_with_strategy(&mut self, strategy: SortStrategy) {
        let len = self.data.len();
        if len <= 1 {
            return;
        }

        let resolved = match strategy {
            SortStrategy::Auto => self.choose_optimal_strategy(),
            concrete => concrete,
        };

        debug!(
            "sorting {len} {} elements with {resolved} (requested {strategy})",
            self.data_type
        );

        let is_less = &self.is_less;
        let v = self.data.as_mut_slice();
        let cmp = &mut |a: &T, b: &T| is_less(a, b);

        match resolved {
            SortStrategy::Insertion => insertion::sort_by(v, cmp),
            SortStrategy::TimsortLite => timsort_lite::sort_by(v, cmp),
            SortStrategy::Introsort => introsort::sort_by(v, cmp),
            SortStrategy::Merge => merge::sort_by(v, cmp),
            SortStrategy::Radix | SortStrategy::Counting => {
                let key = self.integer_key;
                let sorted = self.data_type == DataType::Integer
                    && match resolved {
                        SortStrategy::Radix => radix::sort_by_key(v, key),
                        _ => counting::sort_by_key(v, key),
                    };

                if !sorted {
                    debug!(
                        "{resolved} not applicable to these {} elements, falling back to quick",
                        self.data_type
                    );
                    quicksort::sort_by(v, cmp);
                }
            }
            // Auto was resolved above.
            SortStrategy::Quick | SortStrategy::Auto => quicksort::sort_by(v, cmp),
        }

        // Ascending order under `is_less` is a valid min-heap, only the key based sorts can
        // disagree with it.
        if self.mode == QueueMode::Heap
            && matches!(resolved, SortStrategy::Radix | SortStrategy::Counting)
        {
            self.rebuild_heap();
        }
    }

    /// Copy of the live elements, in buffer order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T, F> PQueue<T, F> {
    /// Consumes the queue and returns its buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> NaturalPQueue<T>
where
    T: Ord + Classify,
{
    /// Creates a queue ordered by `T`'s [`Ord`] impl.
    pub fn from_ord<I>(data: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::new(data, ord_less::<T>)
    }
}

impl<T, F> Extend<T> for PQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PQueue")
            .field("data", &self.data)
            .field("data_type", &self.data_type)
            .field("mode", &self.mode)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn no_integer_key<T>(_: &T) -> Option<i128> {
    None
}

fn ord_less<T: Ord>(a: &T, b: &T) -> bool {
    a.cmp(b) == Ordering::Less
}
