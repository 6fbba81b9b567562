use std::borrow::Borrow;
use std::cmp::Ordering;

use super::RBTree;
use super::node::{Dir, NodeId};

pub(super) enum SearchResult {
    Found(NodeId),
    /// Where the key would be attached: the last node visited and the side
    /// of it that was empty, or `None` for an empty tree.
    GoDown(Option<(NodeId, Dir)>),
}

impl<T> RBTree<T> {
    /// Looks up `key`, descending from the root. Returns a `Found` with the
    /// matching node, if any. Otherwise, returns a `GoDown` with the empty
    /// child slot where the key belongs.
    pub(super) fn search_tree<Q>(&self, key: &Q) -> SearchResult
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut id) = self.root else {
            return SearchResult::GoDown(None)
        };
        loop {
            let node = &self.nodes[id];
            let dir = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return SearchResult::Found(id),
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
            };
            match node.child(dir) {
                Some(child) => id = child,
                None => return SearchResult::GoDown(Some((id, dir))),
            }
        }
    }

    /// The closest node to `key` on side `dir`, not counting a node equal
    /// to `key` itself.
    pub(super) fn neighbor<Q>(&self, key: &Q, dir: Dir) -> Option<NodeId>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            let towards = match key.cmp(node.key.borrow()) {
                Ordering::Equal => return self.step(id, dir),
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
            };
            // going away from `dir` means this node lies on the `dir` side of `key`
            if towards != dir {
                best = Some(id);
            }
            cursor = node.child(towards);
        }
        best
    }
}
