use std::iter::FusedIterator;

use super::RBTree;
use super::node::{Dir, NodeId};

/// In-order iterator over the keys of an [`RBTree`].
///
/// Moves between nodes through child and parent links, so each step is
/// amortized O(1) and never searches from the root again.
pub struct Iter<'a, T> {
    tree: &'a RBTree<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.tree.step(id, Dir::Right);
        Some(&self.tree.nodes[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.tree.step(id, Dir::Left);
        Some(&self.tree.nodes[id].key)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning in-order iterator over the keys of an [`RBTree`].
pub struct IntoIter<T> {
    keys: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.keys.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> RBTree<T> {
    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let ends = |dir| self.root.map(|root| self.extreme(root, dir));
        Iter {
            tree: self,
            front: ends(Dir::Left),
            back: ends(Dir::Right),
            remaining: self.len(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for RBTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let order: Vec<NodeId> = {
            let mut order = Vec::with_capacity(self.len());
            let mut cursor = self.root.map(|root| self.extreme(root, Dir::Left));
            while let Some(id) = cursor {
                order.push(id);
                cursor = self.step(id, Dir::Right);
            }
            order
        };
        let keys: Vec<T> = order.into_iter().map(|id| self.nodes.remove(id).key).collect();
        self.root = None;
        IntoIter { keys: keys.into_iter() }
    }
}
