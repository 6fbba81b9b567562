use std::borrow::Borrow;
use std::fmt;

use log::debug;
use slab::Slab;

mod error;
mod insert;
mod iter;
mod node;
mod print;
mod remove;
mod search;

#[cfg(test)]
mod check;

pub use error::TreeError;
pub use iter::{IntoIter, Iter};

use node::{Dir, Node, NodeId};
use search::SearchResult;

// Every path from a node down to an absent child sees the same number of
// black nodes, and no red node has a red child. So a node of height `h` has
// black height at least `h/2`, its subtree holds at least `2^bh - 1` nodes,
// and a tree with `n` nodes has height at most `2*log₂(n+1)`.

/// An ordered set of unique keys, balanced as a red-black tree.
///
/// All nodes live in an arena owned by the tree. Children and parents are
/// arena indices, so the parent back-reference is a plain number and never
/// keeps anything alive.
pub struct RBTree<T> {
    nodes: Slab<Node<T>>,
    root: Option<NodeId>,
}

impl<T> RBTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// The amount of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The smallest key in the tree.
    pub fn find_min(&self) -> Result<&T, TreeError> {
        let root = self.root.ok_or(TreeError::Empty)?;
        Ok(&self.nodes[self.extreme(root, Dir::Left)].key)
    }

    /// The largest key in the tree.
    pub fn find_max(&self) -> Result<&T, TreeError> {
        let root = self.root.ok_or(TreeError::Empty)?;
        Ok(&self.nodes[self.extreme(root, Dir::Right)].key)
    }

    /// Destroys every node, children before their parent.
    ///
    /// Each node is unlinked from its parent before it is freed, so no
    /// parent is ever left pointing at a freed slot.
    pub fn clear(&mut self) {
        debug!("Clearing tree of {} nodes", self.len());
        let mut cursor = self.root.take();
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if let Some(child) = node.child(Dir::Left).or(node.child(Dir::Right)) {
                cursor = Some(child);
                continue
            }
            let parent = node.parent;
            if let Some(parent) = parent {
                let side = self.side_of(parent, id);
                self.nodes[parent].set_child(side, None);
            }
            self.nodes.remove(id);
            cursor = parent;
        }
        debug_assert!(self.nodes.is_empty());
    }
}

impl<T: Ord> RBTree<T> {
    /// Whether `key` is in the tree.
    ///
    /// Complexity: O(log(n))
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        matches!(self.search_tree(key), SearchResult::Found(_))
    }

    /// The stored key equal to `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.search_tree(key) {
            SearchResult::Found(id) => Some(&self.nodes[id].key),
            SearchResult::GoDown(_) => None,
        }
    }

    /// The smallest key strictly greater than `key`. `key` itself doesn't
    /// have to be in the tree.
    pub fn successor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.neighbor(key, Dir::Right).map(|id| &self.nodes[id].key)
    }

    /// The largest key strictly smaller than `key`.
    pub fn predecessor<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.neighbor(key, Dir::Left).map(|id| &self.nodes[id].key)
    }
}

impl<T> Default for RBTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: the clone gets its own compact arena with the same shape and
/// colors, and parent links pointing into that arena.
impl<T: Clone> Clone for RBTree<T> {
    fn clone(&self) -> Self {
        debug!("Copying tree of {} nodes", self.len());
        let mut nodes = Slab::with_capacity(self.len());
        let Some(root) = self.root else {
            return Self { nodes, root: None }
        };

        // (source node, where its copy hangs in the new arena)
        let mut stack: Vec<(NodeId, Option<(NodeId, Dir)>)> = vec![(root, None)];
        let mut new_root = None;
        while let Some((src, slot)) = stack.pop() {
            let node = &self.nodes[src];
            let mut copy = Node::new(node.key.clone(), slot.map(|(parent, _)| parent));
            copy.color = node.color;
            let id = nodes.insert(copy);
            match slot {
                Some((parent, dir)) => nodes[parent].set_child(dir, Some(id)),
                None => new_root = Some(id),
            }
            for dir in [Dir::Right, Dir::Left] {
                if let Some(child) = node.child(dir) {
                    stack.push((child, Some((id, dir))));
                }
            }
        }

        Self { nodes, root: new_root }
    }
}

impl<T: fmt::Debug> fmt::Debug for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for RBTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RBTree<T> {}

impl<T: Ord> FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RBTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for RBTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
