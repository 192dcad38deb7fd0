//! Randomized balanced trees built on a merge/split algebra, and the heaps that sit beside them.
//!
//! The [`treap`] module holds the two treap variants: [`treap::TreapSet`], an ordered set over a
//! total order, and [`treap::TreapList`], an implicit treap indexed by position. The [`heap`]
//! module holds two conventional priority queues.

mod compare;
mod error;
pub mod heap;
pub mod treap;

pub use crate::compare::{Compare, FnOrder, NaturalOrder};
pub use crate::error::{Error, Result};
