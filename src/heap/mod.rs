//! Priority queues that yield their minimum element first under a `Compare` order.

mod binary_heap;
mod leftist_heap;

pub use self::binary_heap::{BinaryHeap, BinaryHeapIter};
pub use self::leftist_heap::LeftistHeap;

/// Operations shared by the priority queues in this module.
pub trait Heap<T> {
    /// Inserts a value into the heap.
    fn push(&mut self, value: T);

    /// Returns the minimum value, or `None` if the heap is empty.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum value, or `None` if the heap is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of values in the heap.
    fn len(&self) -> usize;

    /// Returns `true` if the heap is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every value from the heap.
    fn clear(&mut self);
}
