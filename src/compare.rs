use std::cmp::Ordering;
use std::fmt;

/// A total order over `T`, supplied once when a collection is constructed.
pub trait Compare<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of a type, as given by its `Ord` implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// An order defined by a comparison function.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use treap_collections::{Compare, FnOrder};
///
/// let reverse = FnOrder(|a: &u32, b: &u32| b.cmp(a));
/// assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T: ?Sized, F> Compare<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder")
    }
}
