use crate::compare::{Compare, FnOrder, NaturalOrder};
use crate::error::{Error, Result};
use crate::treap::iter::{IntoIter, Iter};
use crate::treap::node::{Node, Priorities};
use crate::treap::tree::{self, KeyPivot};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a value and a priority. The value of any node is greater than all values in its left
/// subtree and less than all values occuring in its right subtree. The priority of a node is
/// greater than or equal to the priority of all nodes in its subtrees. By randomly generating
/// priorities, the expected height of the tree is proportional to the logarithm of the number of
/// values.
///
/// Every mutation is a split by key followed by merges. Elements that compare equal under the
/// set's order are duplicates, and a duplicate is never inserted.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapSet;
///
/// let mut set = TreapSet::new();
/// set.insert(5);
/// set.insert(3);
/// set.insert(8);
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(&8));
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &5, &8]);
///
/// assert!(set.remove(&5));
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &8]);
/// ```
pub struct TreapSet<T, C = NaturalOrder> {
    tree: tree::Tree<T>,
    comparator: C,
    priorities: Priorities,
}

impl<T: Ord> TreapSet<T> {
    /// Constructs a new, empty `TreapSet<T>` ordered by `T`'s natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = TreapSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<T, F> TreapSet<T, FnOrder<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Constructs a new, empty set ordered by `comparator`, which must be a total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.min(), Some(&2));
    /// ```
    pub fn with_comparator(comparator: F) -> Self {
        Self::with_order(FnOrder(comparator))
    }
}

impl<T, C> TreapSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty set ordered by any `Compare` implementation.
    pub fn with_order(comparator: C) -> Self {
        TreapSet {
            tree: None,
            comparator,
            priorities: Priorities::new(),
        }
    }

    /// Reseeds the priority source so that the shape of the tree is reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new().seeded([1, 2, 3, 4]);
    /// set.insert(1);
    /// ```
    pub fn seeded(mut self, seed: [u32; 4]) -> Self {
        self.priorities = Priorities::seeded(seed);
        self
    }

    /// Inserts a value into the set. Returns `false` and leaves the set unchanged if an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        let TreapSet {
            ref mut tree,
            ref comparator,
            ref mut priorities,
        } = self;
        let right = tree::split(tree, &mut KeyPivot::inclusive(&value, comparator));
        let node = Node::new(value, priorities.next());
        tree::merge(tree, Some(Box::new(node)));
        tree::merge(tree, right);
        true
    }

    /// Removes a value from the set. Returns `true` if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        let TreapSet {
            ref mut tree,
            ref comparator,
            ..
        } = self;
        let mut middle = tree::split(tree, &mut KeyPivot::exclusive(value, comparator));
        let right = tree::split(&mut middle, &mut KeyPivot::inclusive(value, comparator));
        tree::merge(tree, right);
        middle.is_some()
    }

    /// Checks if a value exists in the set. The tree is only descended, never restructured.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut set = TreapSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T> {
        tree::find(&self.tree, value, &self.comparator)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the set, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Returns the minimum value of the set, or `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set, or `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Moves every value of `other` into this set, leaving `other` empty. Every value of `other`
    /// must be greater than every value of `self`; otherwise `Error::OutOfOrder` is returned and
    /// both sets are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let mut low: TreapSet<u32> = (0..3).collect();
    /// let mut high: TreapSet<u32> = (3..6).collect();
    /// low.append(&mut high).unwrap();
    /// assert_eq!(low.len(), 6);
    /// assert!(high.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) -> Result<()> {
        if let (Some(max), Some(min)) = (self.max(), other.min()) {
            if self.comparator.compare(max, min) != Ordering::Less {
                return Err(Error::OutOfOrder);
            }
        }
        debug!("appending {} values to a set of {}", other.len(), self.len());
        tree::merge(&mut self.tree, other.tree.take());
        Ok(())
    }

    /// Returns an iterator over the set in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.tree)
    }

    /// Builds a set from values already sorted in strictly ascending order, in `O(N)` time.
    fn from_sorted(values: Vec<T>, comparator: C) -> Self {
        let mut priorities = Priorities::new();
        debug!("building a set of {} values", values.len());
        TreapSet {
            tree: tree::build(values, &mut priorities),
            comparator,
            priorities,
        }
    }
}

impl<T, C> TreapSet<T, C>
where
    C: Compare<T> + Clone,
{
    /// Splits the set in two by `key`. The first set holds every value less than or equal to
    /// `key` and the second holds the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = (1..8).collect();
    /// let (left, right) = set.left_split(&4);
    /// assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3, &4]);
    /// assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&5, &6, &7]);
    /// ```
    pub fn left_split(self, key: &T) -> (Self, Self) {
        self.split_by(key, true)
    }

    /// Splits the set in two by `key`. The first set holds every value strictly less than `key`
    /// and the second holds the rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapSet;
    ///
    /// let set: TreapSet<u32> = (1..8).collect();
    /// let (left, right) = set.right_split(&4);
    /// assert_eq!(left.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    /// assert_eq!(right.iter().collect::<Vec<&u32>>(), vec![&4, &5, &6, &7]);
    /// ```
    pub fn right_split(self, key: &T) -> (Self, Self) {
        self.split_by(key, false)
    }

    fn split_by(mut self, key: &T, inclusive: bool) -> (Self, Self) {
        let right = {
            let mut pivot = if inclusive {
                KeyPivot::inclusive(key, &self.comparator)
            } else {
                KeyPivot::exclusive(key, &self.comparator)
            };
            tree::split(&mut self.tree, &mut pivot)
        };
        debug!(
            "split set into {} and {} values",
            self.len(),
            tree::len(&right)
        );
        let other = TreapSet {
            tree: right,
            comparator: self.comparator.clone(),
            priorities: self.priorities.fork(),
        };
        (self, other)
    }
}

impl<T, C> IntoIterator for TreapSet<T, C> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T, C> IntoIterator for &'a TreapSet<T, C>
where
    T: 'a,
    C: Compare<T>,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for TreapSet<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = iter.into_iter().collect();
        values.sort();
        values.dedup();
        Self::from_sorted(values, NaturalOrder)
    }
}

impl<T, C> Extend<T> for TreapSet<T, C>
where
    C: Compare<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> Default for TreapSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for TreapSet<T, C>
where
    T: fmt::Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
