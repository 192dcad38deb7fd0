use crate::compare::{Compare, FnOrder, NaturalOrder};
use crate::heap::Heap;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

type Tree<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    // Length of the shortest path to a missing child.
    rank: usize,
    left: Tree<T>,
    right: Tree<T>,
}

fn rank<T>(tree: &Tree<T>) -> usize {
    tree.as_ref().map_or(0, |node| node.rank)
}

fn merge<T, C>(l_tree: Tree<T>, r_tree: Tree<T>, comparator: &C) -> Tree<T>
where
    C: Compare<T>,
{
    match (l_tree, r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if comparator.compare(&r_node.value, &l_node.value) == Ordering::Less {
                mem::swap(&mut l_node, &mut r_node);
            }
            let right = l_node.right.take();
            l_node.right = merge(right, Some(r_node), comparator);
            if rank(&l_node.left) < rank(&l_node.right) {
                let Node {
                    ref mut left,
                    ref mut right,
                    ..
                } = *l_node;
                mem::swap(left, right);
            }
            l_node.rank = rank(&l_node.right) + 1;
            Some(l_node)
        },
        (tree, None) | (None, tree) => tree,
    }
}

/// A min-heap implemented by a leftist tree.
///
/// Every node stores the length of its shortest path to a missing child, and a left child's is
/// never shorter than its sibling's. The right spine therefore has `O(log N)` nodes, and two
/// heaps merge in `O(log N)` time by walking their right spines.
///
/// # Examples
///
/// ```
/// use treap_collections::heap::{Heap, LeftistHeap};
///
/// let mut heap = LeftistHeap::new();
/// heap.push(2);
/// heap.push(1);
///
/// let mut other = LeftistHeap::new();
/// other.push(0);
/// heap.append(other);
///
/// assert_eq!(heap.pop(), Some(0));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.len(), 1);
/// ```
pub struct LeftistHeap<T, C = NaturalOrder> {
    tree: Tree<T>,
    len: usize,
    comparator: C,
}

impl<T: Ord> LeftistHeap<T> {
    /// Constructs a new, empty `LeftistHeap<T>` ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<T, F> LeftistHeap<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Constructs a new, empty heap ordered by `comparator`.
    pub fn with_comparator(comparator: F) -> Self {
        Self::with_order(FnOrder(comparator))
    }
}

impl<T, C> LeftistHeap<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty heap ordered by any `Compare` implementation.
    pub fn with_order(comparator: C) -> Self {
        LeftistHeap {
            tree: None,
            len: 0,
            comparator,
        }
    }

    /// Moves every value of `other` into this heap. `other` is read with this heap's order.
    pub fn append(&mut self, other: LeftistHeap<T, C>) {
        let tree = self.tree.take();
        self.tree = merge(tree, other.tree, &self.comparator);
        self.len += other.len;
    }
}

impl<T, C> Heap<T> for LeftistHeap<T, C>
where
    C: Compare<T>,
{
    fn push(&mut self, value: T) {
        let node = Node {
            value,
            rank: 1,
            left: None,
            right: None,
        };
        let tree = self.tree.take();
        self.tree = merge(tree, Some(Box::new(node)), &self.comparator);
        self.len += 1;
    }

    fn peek(&self) -> Option<&T> {
        self.tree.as_ref().map(|node| &node.value)
    }

    fn pop(&mut self) -> Option<T> {
        self.tree.take().map(|node| {
            let Node {
                value, left, right, ..
            } = *node;
            self.tree = merge(left, right, &self.comparator);
            self.len -= 1;
            value
        })
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }
}

impl<T: Ord> Default for LeftistHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for LeftistHeap<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .field("min", &self.tree.as_ref().map(|node| &node.value))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{rank, LeftistHeap, Tree};
    use crate::heap::Heap;
    use proptest::prelude::*;

    fn check<T: Ord>(tree: &Tree<T>) -> usize {
        match tree {
            Some(node) => {
                assert!(rank(&node.left) >= rank(&node.right));
                assert_eq!(node.rank, rank(&node.right) + 1);
                for child in [&node.left, &node.right].iter() {
                    if let Some(child_node) = child {
                        assert!(node.value <= child_node.value);
                    }
                }
                1 + check(&node.left) + check(&node.right)
            },
            None => 0,
        }
    }

    #[test]
    fn test_empty() {
        let mut heap: LeftistHeap<u32> = LeftistHeap::new();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.pop(), None);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_comparator() {
        let mut heap = LeftistHeap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
        heap.push(1);
        heap.push(3);
        heap.push(2);
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(2));
    }

    #[test]
    fn test_append() {
        let mut a = LeftistHeap::new();
        let mut b = LeftistHeap::new();
        for value in 0..10 {
            a.push(value * 2);
            b.push(value * 2 + 1);
        }
        a.append(b);
        assert_eq!(check(&a.tree), 20);
        assert_eq!(a.len(), 20);
        assert_eq!(a.peek(), Some(&0));
    }

    proptest! {
        #[test]
        fn test_pops_in_order(values in proptest::collection::vec(any::<i32>(), 0..200)) {
            let mut heap = LeftistHeap::new();
            for value in &values {
                heap.push(*value);
            }
            prop_assert_eq!(check(&heap.tree), values.len());
            let mut popped = Vec::new();
            while let Some(value) = heap.pop() {
                popped.push(value);
            }
            let mut expected = values;
            expected.sort();
            prop_assert_eq!(popped, expected);
        }
    }
}
