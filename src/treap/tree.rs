//! Merge and split over treaps, shared by the ordered and the implicit variant.
//!
//! Both operations consume the touched path and rebuild it with new child links. Subtrees off
//! that path are moved into the result unchanged.

use crate::compare::Compare;
use crate::treap::node::{Node, Priorities};
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// Decides, node by node, which side of a split a subtree falls on.
pub trait Pivot<T> {
    /// Returns `true` if `node` and its whole left subtree belong to the left part. The split then
    /// continues in the right subtree, so a pivot may rebase itself before returning `true`.
    fn goes_left(&mut self, node: &Node<T>) -> bool;
}

/// Splits by comparison against a key. An inclusive pivot sends elements equal to the key left.
pub struct KeyPivot<'a, T, C> {
    key: &'a T,
    comparator: &'a C,
    inclusive: bool,
}

impl<'a, T, C: Compare<T>> KeyPivot<'a, T, C> {
    /// Left part receives every element `<= key`.
    pub fn inclusive(key: &'a T, comparator: &'a C) -> Self {
        KeyPivot {
            key,
            comparator,
            inclusive: true,
        }
    }

    /// Left part receives every element `< key`.
    pub fn exclusive(key: &'a T, comparator: &'a C) -> Self {
        KeyPivot {
            key,
            comparator,
            inclusive: false,
        }
    }
}

impl<'a, T, C: Compare<T>> Pivot<T> for KeyPivot<'a, T, C> {
    fn goes_left(&mut self, node: &Node<T>) -> bool {
        match self.comparator.compare(&node.value, self.key) {
            Ordering::Less => true,
            Ordering::Equal => self.inclusive,
            Ordering::Greater => false,
        }
    }
}

/// Splits by position. Left part receives the first `index` elements.
pub struct RankPivot {
    index: usize,
}

impl RankPivot {
    pub fn new(index: usize) -> Self {
        RankPivot { index }
    }
}

impl<T> Pivot<T> for RankPivot {
    fn goes_left(&mut self, node: &Node<T>) -> bool {
        let key = node.implicit_key();
        if key <= self.index {
            self.index -= key;
            true
        } else {
            false
        }
    }
}

/// Appends `r_tree` to `l_tree`. Every element of `l_tree` must precede every element of
/// `r_tree`; this is not checked.
pub fn merge<T>(l_tree: &mut Tree<T>, r_tree: Tree<T>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                l_node.update();
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                r_node.update();
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits `tree` in place. `tree` keeps the left part and the right part is returned.
pub fn split<T, P>(tree: &mut Tree<T>, pivot: &mut P) -> Tree<T>
where
    P: Pivot<T>,
{
    match tree.take() {
        Some(mut node) => {
            if pivot.goes_left(&node) {
                let ret = split(&mut node.right, pivot);
                node.update();
                *tree = Some(node);
                ret
            } else {
                let res = split(&mut node.left, pivot);
                *tree = node.left.take();
                node.left = res;
                node.update();
                Some(node)
            }
        },
        None => None,
    }
}

/// Builds a treap holding `values` in order in `O(N)` time.
///
/// The shape starts out perfectly balanced with a freshly drawn priority per node, and heap
/// order is then restored bottom-up by sifting priorities down. Swapping priorities never moves
/// a value, so in-order position is preserved.
pub fn build<T>(values: Vec<T>, priorities: &mut Priorities) -> Tree<T> {
    let len = values.len();
    build_range(&mut values.into_iter(), len, priorities)
}

fn build_range<T, I>(values: &mut I, len: usize, priorities: &mut Priorities) -> Tree<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let left_len = len / 2;
    let left = build_range(values, left_len, priorities);
    let value = match values.next() {
        Some(value) => value,
        None => return left,
    };
    let mut node = Box::new(Node::new(value, priorities.next()));
    node.left = left;
    node.right = build_range(values, len - left_len - 1, priorities);
    node.update();
    sift_down(&mut node);
    Some(node)
}

fn sift_down<T>(node: &mut Node<T>) {
    let Node {
        priority,
        left,
        right,
        ..
    } = node;
    let child = match (left.as_mut(), right.as_mut()) {
        (Some(left_node), Some(right_node)) => {
            if left_node.priority > right_node.priority {
                left_node
            } else {
                right_node
            }
        },
        (Some(left_node), None) => left_node,
        (None, Some(right_node)) => right_node,
        (None, None) => return,
    };
    if child.priority > *priority {
        mem::swap(priority, &mut child.priority);
        sift_down(child);
    }
}

pub fn len<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => node.len,
        None => 0,
    }
}

/// Looks up a zero-based position by descending on subtree sizes. `implicit_key` is at least one,
/// so `key - 1` is the zero-based rank of the node and never underflows.
pub fn get<T>(tree: &Tree<T>, index: usize) -> Option<&T> {
    tree.as_ref().and_then(|node| {
        let key = node.implicit_key();
        match index.cmp(&(key - 1)) {
            Ordering::Less => get(&node.left, index),
            Ordering::Greater => get(&node.right, index - key),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn get_mut<T>(tree: &mut Tree<T>, index: usize) -> Option<&mut T> {
    tree.as_mut().and_then(|node| {
        let key = node.implicit_key();
        match index.cmp(&(key - 1)) {
            Ordering::Less => get_mut(&mut node.left, index),
            Ordering::Greater => get_mut(&mut node.right, index - key),
            Ordering::Equal => Some(&mut node.value),
        }
    })
}

pub fn find<'a, T, C>(tree: &'a Tree<T>, key: &T, comparator: &C) -> Option<&'a T>
where
    C: Compare<T>,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match comparator.compare(key, &node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return Some(&node.value),
        }
    }
    None
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Asserts that every cached length is consistent and that priorities are heap-ordered. Returns
/// the number of nodes.
#[cfg(test)]
pub fn check_invariants<T>(tree: &Tree<T>) -> usize {
    match tree {
        Some(node) => {
            for child in [&node.left, &node.right].iter() {
                if let Some(child_node) = child {
                    assert!(node.priority >= child_node.priority);
                }
            }
            let len = 1 + check_invariants(&node.left) + check_invariants(&node.right);
            assert_eq!(node.len, len);
            len
        },
        None => 0,
    }
}
