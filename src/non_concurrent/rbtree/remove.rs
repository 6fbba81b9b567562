use std::borrow::Borrow;
use std::cmp::Ordering;

use log::trace;

use super::RBTree;
use super::node::{Color, Dir, NodeId};
use super::search::SearchResult;

impl<T: Ord> RBTree<T> {
    /// Removes `key` from the tree. Returns whether it was present.
    ///
    /// Complexity: O(log(n))
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes `key` from the tree and hands back the stored key.
    ///
    /// A missing key leaves the tree untouched: the rebalancing below only
    /// starts once the key is known to be there.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let SearchResult::Found(target) = self.search_tree(key) else {
            return None
        };
        let root = self.root?;

        if self.nodes[root].is_leaf() {
            debug_assert_eq!(root, target);
            self.root = None;
            return Some(self.nodes.remove(root).key)
        }

        // with two black children the root can be made red without changing
        // any black height, which gives the descent its first red node
        let (left, right) = (self.child(root, Dir::Left), self.child(root, Dir::Right));
        if !self.is_red(left) && !self.is_red(right) {
            self.set_color(root, Color::Red);
        }

        // Walk down to the node that will be physically unlinked: `target`
        // itself if it has no right child, otherwise its in-order successor.
        // Before leaving a node, it is made red (unless it is the root, or
        // the next node on the path is already red).
        let mut current = root;
        loop {
            let dir = match key.cmp(self.nodes[current].key.borrow()) {
                Ordering::Less => Dir::Left,
                Ordering::Greater => Dir::Right,
                // once past the target, every key compares `Less`, so this
                // leads to the leftmost node of its right subtree
                Ordering::Equal => Dir::Right,
            };

            if !self.is_red(Some(current)) && !self.is_red(self.child(current, dir)) {
                self.push_red_down(current, dir);
            }

            match self.child(current, dir) {
                Some(next) => current = next,
                None => break,
            }
        }

        if current != target {
            trace!("Swapping the key of node {target} with its successor {current}");
            let (a, b) = self.nodes.get2_mut(current, target)
                .expect("target and successor are distinct live nodes");
            std::mem::swap(&mut a.key, &mut b.key);
        }
        let removed = self.unlink(current);

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
        Some(removed)
    }

    /// Makes the black node `current` red ahead of the descent towards
    /// `dir`, where its child is black too. Its parent, if any, is red.
    ///
    /// Cases, in the order they are tried:
    /// - the child off the path is red: rotate it above `current`
    /// - the sibling has two black children: flip colors with the parent
    /// - the sibling has a red child: rotate it (single or double) into the
    ///   parent's place
    ///
    /// The red off-path child has to be handled first: only then is it
    /// known that the flip cannot leave `current` red above a red child.
    fn push_red_down(&mut self, current: NodeId, dir: Dir) {
        if self.is_red(self.child(current, dir.opposite())) {
            self.rotate_red_child_up(current, dir);
            return
        }
        // a black root with two black children was already turned red
        let Some(parent) = self.parent(current) else {
            return
        };

        let side = self.side_of(parent, current);
        let sibling = self.child(parent, side.opposite())
            .expect("a black non-root node always has a sibling");
        let near = self.child(sibling, side);
        let far = self.child(sibling, side.opposite());

        if !self.is_red(near) && !self.is_red(far) {
            // sibling has two black children
            trace!("Remove fix-up: color flip at node {parent}");
            self.set_color(parent, Color::Black);
            self.set_color(sibling, Color::Red);
            self.set_color(current, Color::Red);
            return
        }

        // a red nephew is rotated up into the parent's place
        let top = if self.is_red(near) {
            trace!("Remove fix-up: double rotation at node {parent}");
            self.rotate(sibling, side.opposite());
            self.rotate(parent, side)
        } else {
            trace!("Remove fix-up: single rotation at node {parent}");
            self.rotate(parent, side)
        };
        self.set_color(current, Color::Red);
        self.set_color(top, Color::Red);
        for dir in [Dir::Left, Dir::Right] {
            if let Some(child) = self.child(top, dir) {
                self.set_color(child, Color::Black);
            }
        }
    }

    /// `current` is black, its child towards `dir` is black and the other
    /// one is red: rotate the red one above it, which leaves `current` red
    /// and still on the path.
    fn rotate_red_child_up(&mut self, current: NodeId, dir: Dir) {
        trace!("Remove fix-up: rotating red child over node {current}");
        let top = self.rotate(current, dir);
        self.set_color(top, Color::Black);
        self.set_color(current, Color::Red);
    }

    /// Unlinks a node with at most one child and frees it. The child takes
    /// its place and turns black.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = &self.nodes[id];
        debug_assert!(node.child(Dir::Left).is_none() || node.child(Dir::Right).is_none());
        let child = node.child(Dir::Left).or(node.child(Dir::Right));
        let parent = node.parent;

        self.replace_child(parent, id, child);
        if let Some(child) = child {
            self.set_color(child, Color::Black);
        }
        self.nodes.remove(id).key
    }
}
