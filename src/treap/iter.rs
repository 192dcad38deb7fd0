//! In-order traversal shared by `TreapSet` and `TreapList`.

use crate::treap::node::Node;
use crate::treap::tree::{self, Tree};
use std::iter::FusedIterator;

/// An iterator over the values of a treap in order.
///
/// This iterator traverses the elements in-order and yields immutable references.
pub struct Iter<'a, T> {
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
            remaining: tree::len(tree),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the values of a treap in order.
pub struct IntoIter<T> {
    current: Tree<T>,
    stack: Vec<Node<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        let remaining = tree::len(&tree);
        IntoIter {
            current: tree,
            stack: Vec::new(),
            remaining,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            self.remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A mutable iterator over the values of a treap in order.
///
/// Only values are exposed, so the ordering of a `TreapSet` can not be broken through it; it is
/// handed out by `TreapList` alone.
pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
    stack: Vec<(&'a mut T, Option<&'a mut Node<T>>)>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(tree: &'a mut Tree<T>) -> Self {
        let remaining = tree::len(tree);
        IterMut {
            current: tree.as_mut().map(|node| &mut **node),
            stack: Vec::new(),
            remaining,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T>
where
    T: 'a,
{
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let IterMut {
            current,
            stack,
            remaining,
        } = self;
        while let Some(node) = current.take() {
            let Node {
                value,
                left,
                right,
                ..
            } = node;
            *current = left.as_mut().map(|node| &mut **node);
            stack.push((value, right.as_mut().map(|node| &mut **node)));
        }
        stack.pop().map(|(value, right)| {
            *current = right;
            *remaining -= 1;
            value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}
