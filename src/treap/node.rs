use rand::{Rng, SeedableRng, XorShiftRng};
use crate::treap::tree::Tree;

/// A struct representing an internal node of a treap. The same node backs both the ordered and
/// the implicit variant; only the pivot used to split it differs.
pub struct Node<T> {
    pub value: T,
    pub priority: u32,
    pub len: usize,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T, priority: u32) -> Self {
        Node {
            value,
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = 1;
        if let Some(ref left_node) = left {
            *len += left_node.len;
        }
        if let Some(ref right_node) = right {
            *len += right_node.len;
        }
    }

    /// One-based rank of this node within its own subtree.
    pub fn implicit_key(&self) -> usize {
        match self.left {
            Some(ref left_node) => left_node.len + 1,
            None => 1,
        }
    }
}

/// Source of node priorities. Each node draws exactly one priority when it is created.
#[derive(Clone)]
pub struct Priorities {
    rng: XorShiftRng,
}

impl Priorities {
    pub fn new() -> Self {
        Priorities {
            rng: rand::weak_rng(),
        }
    }

    pub fn seeded(seed: [u32; 4]) -> Self {
        let rng = if seed == [0; 4] {
            XorShiftRng::new_unseeded()
        } else {
            XorShiftRng::from_seed(seed)
        };
        Priorities { rng }
    }

    pub fn next(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Returns an independent source for a collection split off from this one.
    pub fn fork(&mut self) -> Self {
        Priorities { rng: self.rng.gen() }
    }
}

impl Default for Priorities {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Node, Priorities};

    #[test]
    fn test_update() {
        let mut node = Node::new(2, 10);
        node.left = Some(Box::new(Node::new(1, 5)));
        node.right = Some(Box::new(Node::new(3, 7)));
        node.update();
        assert_eq!(node.len, 3);
        assert_eq!(node.implicit_key(), 2);
    }

    #[test]
    fn test_seeded_priorities_repeat() {
        let mut a = Priorities::seeded([1, 2, 3, 4]);
        let mut b = Priorities::seeded([1, 2, 3, 4]);
        for _ in 0..16 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_zero_seed_is_accepted() {
        let mut priorities = Priorities::seeded([0; 4]);
        priorities.next();
    }
}
