use crate::compare::{Compare, FnOrder, NaturalOrder};
use crate::error::{Error, Result};
use crate::heap::Heap;
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::slice;

const DEFAULT_CAPACITY: usize = 12;

/// A min-heap stored in a growable array.
///
/// The children of the value at index `i` live at `2i + 1` and `2i + 2`. When the array is full it
/// grows by half its capacity plus one.
///
/// # Examples
///
/// ```
/// use treap_collections::heap::{BinaryHeap, Heap};
///
/// let mut heap = BinaryHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), None);
/// ```
pub struct BinaryHeap<T, C = NaturalOrder> {
    values: Vec<T>,
    comparator: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Constructs a new, empty `BinaryHeap<T>` ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }

    /// Constructs a new, empty heap with room for `capacity` values before it grows.
    ///
    /// # Errors
    ///
    /// Returns `Error::ZeroCapacity` if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::heap::BinaryHeap;
    ///
    /// assert!(BinaryHeap::<u32>::with_capacity(0).is_err());
    /// assert!(BinaryHeap::<u32>::with_capacity(4).unwrap().capacity() >= 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(BinaryHeap {
            values: Vec::with_capacity(capacity),
            comparator: NaturalOrder,
        })
    }
}

impl<T, F> BinaryHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Constructs a new, empty heap ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::heap::{BinaryHeap, Heap};
    ///
    /// let mut heap = BinaryHeap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// heap.push(1);
    /// heap.push(2);
    /// assert_eq!(heap.pop(), Some(2));
    /// ```
    pub fn with_comparator(comparator: F) -> Self {
        Self::with_order(FnOrder(comparator))
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty heap ordered by any `Compare` implementation.
    pub fn with_order(comparator: C) -> Self {
        BinaryHeap {
            values: Vec::with_capacity(DEFAULT_CAPACITY),
            comparator,
        }
    }

    /// Returns the number of values the heap can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Returns an iterator over the values in array order, which is not sorted.
    pub fn iter(&self) -> BinaryHeapIter<'_, T> {
        BinaryHeapIter {
            inner: self.values.iter(),
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.comparator.compare(&self.values[i], &self.values[j]) == Ordering::Less
    }

    fn grow(&mut self) {
        let capacity = self.values.capacity();
        self.values.reserve_exact((capacity >> 1) + 1);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) >> 1;
            if !self.less(index, parent) {
                break;
            }
            self.values.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.values.len();
        while 2 * index + 1 < len {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut child = left;
            if right < len && self.less(right, left) {
                child = right;
            }
            if !self.less(child, index) {
                break;
            }
            self.values.swap(index, child);
            index = child;
        }
    }

    fn heapify(&mut self) {
        for index in (0..self.values.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T, C> Heap<T> for BinaryHeap<T, C>
where
    C: Compare<T>,
{
    fn push(&mut self, value: T) {
        if self.values.len() == self.values.capacity() {
            self.grow();
        }
        self.values.push(value);
        let index = self.values.len() - 1;
        self.sift_up(index);
    }

    fn peek(&self) -> Option<&T> {
        self.values.first()
    }

    fn pop(&mut self) -> Option<T> {
        if self.values.is_empty() {
            return None;
        }
        let ret = self.values.swap_remove(0);
        self.sift_down(0);
        Some(ret)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Builds a heap from `values` in `O(N)` time.
    fn from(values: Vec<T>) -> Self {
        debug!("building a binary heap of {} values", values.len());
        let mut heap = BinaryHeap {
            values,
            comparator: NaturalOrder,
        };
        heap.heapify();
        heap
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

/// An iterator for `BinaryHeap<T, C>` that yields values in array order.
pub struct BinaryHeapIter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for BinaryHeapIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
