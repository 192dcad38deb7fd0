use crate::error::{Error, Result};
use crate::treap::iter::{IntoIter, Iter, IterMut};
use crate::treap::node::{Node, Priorities};
use crate::treap::tree::{self, RankPivot};
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Index, IndexMut};

/// A list implemented using an implicit treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key, a value, and a priority. The key of any node is greater than all keys in its
/// left subtree and less than all keys occuring in its right subtree. The priority of a node is
/// greater than or equal to the priority of all nodes in its subtrees. By randomly generating
/// priorities, the expected height of the tree is proportional to the logarithm of the number of
/// keys.
///
/// An implicit treap is a treap where the key of a node is implicitly determined by the size of
/// its left subtree. No position is stored anywhere, so inserting or removing shifts every later
/// element for free. This property allows the list to get, set, remove, and insert at an
/// arbitrary index in `O(log N)` time.
///
/// # Examples
///
/// ```
/// use treap_collections::treap::TreapList;
///
/// let mut list = TreapList::new();
/// list.insert(0, 'a').unwrap();
/// list.insert(1, 'b').unwrap();
/// list.insert(1, 'c').unwrap();
///
/// assert_eq!(list.iter().collect::<Vec<&char>>(), vec![&'a', &'c', &'b']);
/// assert_eq!(list.get(1), Some(&'c'));
/// assert_eq!(list.get(3), None);
///
/// assert_eq!(list.remove(0), Ok('a'));
/// assert_eq!(list.len(), 2);
/// ```
pub struct TreapList<T> {
    tree: tree::Tree<T>,
    priorities: Priorities,
}

impl<T> TreapList<T> {
    /// Constructs a new, empty `TreapList<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let list: TreapList<u32> = TreapList::new();
    /// ```
    pub fn new() -> Self {
        TreapList {
            tree: None,
            priorities: Priorities::new(),
        }
    }

    /// Reseeds the priority source so that the shape of the tree is reproducible.
    pub fn seeded(mut self, seed: [u32; 4]) -> Self {
        self.priorities = Priorities::seeded(seed);
        self
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            trace!("rejected index {} for list of length {}", index, self.len());
            Err(Error::IndexOutOfBounds {
                index,
                len: self.len(),
            })
        }
    }

    /// Inserts a value into the list at a particular index, shifting elements one position to the
    /// right if needed. `index` may equal the length of the list, which appends.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.insert(0, 1).unwrap();
    /// list.insert(0, 2).unwrap();
    /// assert!(list.insert(3, 3).is_err());
    /// assert_eq!(list.get(0), Some(&2));
    /// assert_eq!(list.get(1), Some(&1));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index, self.len() + 1)?;
        let TreapList {
            ref mut tree,
            ref mut priorities,
        } = self;
        let right = tree::split(tree, &mut RankPivot::new(index));
        tree::merge(tree, Some(Box::new(Node::new(value, priorities.next()))));
        tree::merge(tree, right);
        Ok(())
    }

    /// Isolates the node at `index`, hands it to `f` and splices the result back in.
    fn splice<F>(&mut self, index: usize, f: F) -> Result<T>
    where
        F: FnOnce(Box<Node<T>>, &mut Priorities) -> (tree::Tree<T>, T),
    {
        self.check_index(index, self.len())?;
        let TreapList {
            ref mut tree,
            ref mut priorities,
        } = self;
        let mut middle = tree::split(tree, &mut RankPivot::new(index));
        let right = tree::split(&mut middle, &mut RankPivot::new(1));
        let node = match middle {
            Some(node) => node,
            None => unreachable!("index was checked against the list length"),
        };
        let (replacement, ret) = f(node, priorities);
        tree::merge(tree, replacement);
        tree::merge(tree, right);
        Ok(ret)
    }

    /// Replaces the value at a particular index. Returns the previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// assert_eq!(list.set(0, 2), Ok(1));
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.splice(index, |node, priorities| {
            let replacement = Node::new(value, priorities.next());
            (Some(Box::new(replacement)), node.value)
        })
    }

    /// Removes a value at a particular index from the list. Returns the value at the index.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.splice(index, |node, _| (None, node.value))
    }

    /// Inserts a value at the front of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        let node = Node::new(value, self.priorities.next());
        let right = self.tree.take();
        self.tree = Some(Box::new(node));
        tree::merge(&mut self.tree, right);
    }

    /// Inserts a value at the back of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.get(0), Some(&1));
    /// ```
    pub fn push_back(&mut self, value: T) {
        let node = Node::new(value, self.priorities.next());
        tree::merge(&mut self.tree, Some(Box::new(node)));
    }

    /// Removes a value at the front of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_front(), Some(1));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.remove(0).ok()
    }

    /// Removes a value at the back of the list. Returns `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.pop_back(), Some(2));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.len().checked_sub(1)?;
        self.remove(index).ok()
    }

    /// Returns an immutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds. The tree is only descended, never restructured.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(1), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        tree::get(&self.tree, index)
    }

    /// Returns a mutable reference to the value at a particular index. Returns `None` if the
    /// index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// *list.get_mut(0).unwrap() = 2;
    /// assert_eq!(list.get(0), Some(&2));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        tree::get_mut(&mut self.tree, index)
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        tree::len(&self.tree)
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Clears the list, removing all values.
    pub fn clear(&mut self) {
        self.tree = None;
    }

    /// Moves every value of `other` to the back of this list.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (0..3).collect();
    /// list.append((3..5).collect());
    /// assert_eq!(list.into_iter().collect::<Vec<u32>>(), vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn append(&mut self, other: TreapList<T>) {
        tree::merge(&mut self.tree, other.tree);
    }

    /// Splits the list in two at `at`. This list keeps the first `at` values and the rest are
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list: TreapList<u32> = (0..5).collect();
    /// let tail = list.split_off(2).unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(tail.into_iter().collect::<Vec<u32>>(), vec![2, 3, 4]);
    /// ```
    pub fn split_off(&mut self, at: usize) -> Result<TreapList<T>> {
        self.check_index(at, self.len() + 1)?;
        let right = tree::split(&mut self.tree, &mut RankPivot::new(at));
        debug!("split list into {} and {} values", self.len(), tree::len(&right));
        Ok(TreapList {
            tree: right,
            priorities: self.priorities.fork(),
        })
    }

    /// Returns an iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.tree)
    }

    /// Returns a mutable iterator over the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_collections::treap::TreapList;
    ///
    /// let mut list = TreapList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for value in &mut list {
    ///     *value += 1;
    /// }
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.tree)
    }
}

impl<T> IntoIterator for TreapList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a TreapList<T>
where
    T: 'a,
{
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut TreapList<T>
where
    T: 'a,
{
    type IntoIter = IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for TreapList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = iter.into_iter().collect();
        let mut priorities = Priorities::new();
        debug!("building a list of {} values", values.len());
        TreapList {
            tree: tree::build(values, &mut priorities),
            priorities,
        }
    }
}

impl<T> Extend<T> for TreapList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> Default for TreapList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for TreapList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Add for TreapList<T> {
    type Output = TreapList<T>;

    fn add(mut self, other: TreapList<T>) -> TreapList<T> {
        self.append(other);
        self
    }
}

impl<T> Index<usize> for TreapList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for TreapList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::TreapList;
    use crate::error::Error;
    use crate::treap::tree;
    use proptest::prelude::*;

    fn check<T>(list: &TreapList<T>) {
        assert_eq!(tree::check_invariants(&list.tree), list.len());
        assert_eq!(list.iter().count(), list.len());
    }

    #[test]
    fn test_len_empty() {
        let list: TreapList<u32> = TreapList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut list = TreapList::new();
        list.insert(0, 'a').unwrap();
        list.insert(1, 'b').unwrap();
        list.insert(1, 'c').unwrap();
        assert_eq!(list.iter().cloned().collect::<Vec<char>>(), vec!['a', 'c', 'b']);
        assert_eq!(list.get(1), Some(&'c'));
        check(&list);

        assert_eq!(list.remove(0), Ok('a'));
        assert_eq!(list.iter().cloned().collect::<Vec<char>>(), vec!['c', 'b']);
        check(&list);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut list: TreapList<u32> = (0..3).collect();
        let error = Error::IndexOutOfBounds { index: 3, len: 3 };

        assert_eq!(list.get(3), None);
        assert_eq!(list.set(3, 9), Err(error.clone()));
        assert_eq!(list.remove(3), Err(error));
        assert_eq!(
            list.insert(4, 9),
            Err(Error::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert!(list.split_off(4).is_err());

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![0, 1, 2]);
        check(&list);
    }

    #[test]
    fn test_get_max_index() {
        let mut list: TreapList<u32> = (0..3).collect();
        assert_eq!(list.get(usize::MAX), None);
        assert_eq!(list.get_mut(usize::MAX), None);
        assert!(list.set(usize::MAX, 9).is_err());
        assert!(list.remove(usize::MAX).is_err());
        assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![0, 1, 2]);
        check(&list);
    }

    #[test]
    fn test_empty_list_queries() {
        let mut list: TreapList<u32> = TreapList::new();
        assert_eq!(list.get(0), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.remove(0).is_err());
        assert!(list.insert(0, 1).is_ok());
    }

    #[test]
    fn test_pop_until_empty() {
        let mut list: TreapList<u32> = (0..5).collect();
        assert_eq!(list.pop_back(), Some(4));
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());
        check(&list);
    }

    #[test]
    fn test_set() {
        let mut list: TreapList<u32> = (0..5).collect();
        assert_eq!(list.set(2, 7), Ok(2));
        assert_eq!(list.iter().cloned().collect::<Vec<u32>>(), vec![0, 1, 7, 3, 4]);
        check(&list);
    }

    #[test]
    fn test_get_mut() {
        let mut list = TreapList::new();
        list.push_back(1);
        *list.get_mut(0).unwrap() = 3;
        assert_eq!(list.get(0), Some(&3));
        list[0] = 4;
        assert_eq!(list[0], 4);
    }

    #[test]
    fn test_push_pop() {
        let mut list = TreapList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        check(&list);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add() {
        let mut n = TreapList::new();
        n.insert(0, 1).unwrap();
        n.insert(0, 2).unwrap();
        n.insert(1, 3).unwrap();

        let mut m = TreapList::new();
        m.insert(0, 4).unwrap();
        m.insert(0, 5).unwrap();
        m.insert(1, 6).unwrap();

        let res = n + m;

        assert_eq!(
            res.iter().collect::<Vec<&u32>>(),
            vec![&2, &3, &1, &5, &6, &4],
        );
        assert_eq!(res.len(), 6);
        check(&res);
    }

    #[test]
    fn test_split_off() {
        let mut list: TreapList<u32> = (0..10).collect();
        let tail = list.split_off(10).unwrap();
        assert!(tail.is_empty());
        let tail = list.split_off(0).unwrap();
        assert!(list.is_empty());
        assert_eq!(tail.len(), 10);
    }

    #[test]
    fn test_iter_mut() {
        let mut list: TreapList<u32> = vec![2, 3, 1].into_iter().collect();
        for value in &mut list {
            *value += 1;
        }
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &4, &2]);
        assert_eq!(list.iter_mut().len(), 3);
    }

    #[test]
    fn test_debug() {
        let list: TreapList<u32> = (1..3).collect();
        assert_eq!(format!("{:?}", list), "[1, 2]");
    }

    #[derive(Debug, Clone)]
    enum ListOp {
        Insert(usize, u32),
        Set(usize, u32),
        Remove(usize),
        Get(usize),
    }

    fn list_op_strategy() -> impl Strategy<Value = ListOp> {
        prop_oneof![
            (0usize..64, any::<u32>()).prop_map(|(index, value)| ListOp::Insert(index, value)),
            (0usize..64, any::<u32>()).prop_map(|(index, value)| ListOp::Set(index, value)),
            (0usize..64).prop_map(ListOp::Remove),
            (0usize..64).prop_map(ListOp::Get),
        ]
    }

    proptest! {
        #[test]
        fn test_ops_match_vec(ops in proptest::collection::vec(list_op_strategy(), 0..400)) {
            let mut list = TreapList::new();
            let mut expected = Vec::new();
            for op in &ops {
                match *op {
                    ListOp::Insert(index, value) => {
                        let res = list.insert(index, value);
                        prop_assert_eq!(res.is_ok(), index <= expected.len());
                        if index <= expected.len() {
                            expected.insert(index, value);
                        }
                    },
                    ListOp::Set(index, value) => {
                        let res = list.set(index, value);
                        match expected.get_mut(index) {
                            Some(slot) => {
                                prop_assert_eq!(res, Ok(*slot));
                                *slot = value;
                            },
                            None => prop_assert!(res.is_err()),
                        }
                    },
                    ListOp::Remove(index) => {
                        let res = list.remove(index);
                        if index < expected.len() {
                            prop_assert_eq!(res, Ok(expected.remove(index)));
                        } else {
                            prop_assert!(res.is_err());
                        }
                    },
                    ListOp::Get(index) => {
                        prop_assert_eq!(list.get(index), expected.get(index))
                    },
                }
                prop_assert_eq!(list.len(), expected.len());
            }
            check(&list);
            prop_assert_eq!(list.into_iter().collect::<Vec<u32>>(), expected);
        }
    }
}
