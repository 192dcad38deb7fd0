//! Probabilistic binary search trees where each node also maintains the heap invariant.
//!
//! Both collections are built on one pair of primitives: merging two treaps whose elements are
//! already in order, and splitting one treap by a pivot. `TreapSet` pivots on a key and
//! `TreapList` pivots on a position.

mod iter;
mod list;
mod node;
mod set;
mod tree;

pub use self::iter::{IntoIter, Iter, IterMut};
pub use self::list::TreapList;
pub use self::set::TreapSet;
