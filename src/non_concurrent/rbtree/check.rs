use std::fmt::Debug;

use super::RBTree;
use super::node::{Color, Dir, NodeId};

impl<T: Ord + Debug> RBTree<T> {
    /// Panics unless the tree is a valid red-black tree whose arena holds
    /// exactly the reachable nodes. Returns the black height.
    pub(super) fn assert_invariants(&self) -> usize {
        let Some(root) = self.root else {
            assert!(self.nodes.is_empty(), "empty tree still owns {} nodes", self.nodes.len());
            return 0
        };
        assert_eq!(self.parent(root), None, "root has a parent");
        assert_eq!(self.nodes[root].color, Color::Black, "root {:?} is red", self.nodes[root].key);

        let (count, black_height) = self.check_subtree(root, None, None);
        assert_eq!(count, self.nodes.len(), "arena holds unreachable nodes");
        black_height
    }

    /// Returns (node count, black height) of the subtree at `id`, whose keys
    /// must lie strictly between `lower` and `upper`.
    fn check_subtree(&self, id: NodeId, lower: Option<&T>, upper: Option<&T>) -> (usize, usize) {
        let node = &self.nodes[id];
        if let Some(lower) = lower {
            assert!(lower < &node.key, "{:?} is not above {lower:?}", node.key);
        }
        if let Some(upper) = upper {
            assert!(&node.key < upper, "{:?} is not below {upper:?}", node.key);
        }

        let mut count = 1;
        let mut heights = [0; 2];
        for dir in [Dir::Left, Dir::Right] {
            let Some(child) = node.child(dir) else { continue };
            assert_eq!(self.parent(child), Some(id), "broken parent link below {:?}", node.key);
            if node.color == Color::Red {
                assert_eq!(self.nodes[child].color, Color::Black, "red {:?} has a red child", node.key);
            }
            let (lower, upper) = match dir {
                Dir::Left => (lower, Some(&node.key)),
                Dir::Right => (Some(&node.key), upper),
            };
            let (child_count, child_height) = self.check_subtree(child, lower, upper);
            count += child_count;
            heights[dir as usize] = child_height;
        }

        assert_eq!(heights[0], heights[1], "black heights differ below {:?}", node.key);
        let own = match node.color {
            Color::Black => 1,
            Color::Red => 0,
        };
        (count, heights[0] + own)
    }
}
