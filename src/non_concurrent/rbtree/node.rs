use std::fmt;

use super::RBTree;

/// Index of a node in the tree's arena.
pub(super) type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("R"),
            Color::Black => f.write_str("B"),
        }
    }
}

/// Which child of a node. Every fix-up case is written once in terms of a
/// `Dir` and its opposite instead of once per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Dir {
    Left = 0,
    Right = 1,
}

impl Dir {
    pub(super) fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

pub(super) struct Node<T> {
    pub(super) key: T,
    pub(super) color: Color,
    pub(super) parent: Option<NodeId>,
    children: [Option<NodeId>; 2],
}

impl<T> Node<T> {
    /// New nodes are always red.
    pub(super) fn new(key: T, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            children: [None, None],
        }
    }

    pub(super) fn child(&self, dir: Dir) -> Option<NodeId> {
        self.children[dir as usize]
    }

    pub(super) fn set_child(&mut self, dir: Dir, child: Option<NodeId>) {
        self.children[dir as usize] = child;
    }

    pub(super) fn is_leaf(&self) -> bool {
        self.children == [None, None]
    }
}

impl<T> RBTree<T> {
    /// Absent children count as black.
    pub(super) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes[id].color == Color::Red)
    }

    pub(super) fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    pub(super) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub(super) fn child(&self, id: NodeId, dir: Dir) -> Option<NodeId> {
        self.nodes[id].child(dir)
    }

    /// Which side of `parent` the node `child` hangs on.
    pub(super) fn side_of(&self, parent: NodeId, child: NodeId) -> Dir {
        if self.nodes[parent].child(Dir::Left) == Some(child) {
            Dir::Left
        } else {
            debug_assert_eq!(self.nodes[parent].child(Dir::Right), Some(child));
            Dir::Right
        }
    }

    /// The last node reached by going `dir` from `id` for as long as possible.
    pub(super) fn extreme(&self, mut id: NodeId, dir: Dir) -> NodeId {
        while let Some(next) = self.child(id, dir) {
            id = next;
        }
        id
    }

    /// The in-order neighbor of `id` on side `dir` (`Right` is the successor).
    ///
    /// Only follows child and parent links, it never restarts from the root.
    pub(super) fn step(&self, mut id: NodeId, dir: Dir) -> Option<NodeId> {
        if let Some(child) = self.child(id, dir) {
            return Some(self.extreme(child, dir.opposite()))
        }
        // climb until we come up out of a subtree on the `dir.opposite()` side
        while let Some(parent) = self.parent(id) {
            if self.side_of(parent, id) != dir {
                return Some(parent)
            }
            id = parent;
        }
        None
    }

    /// Makes `new` take the place of `old` under `parent` (or as the root
    /// when `parent` is `None`), and points `new` back at `parent`.
    pub(super) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(parent) => {
                let side = self.side_of(parent, old);
                self.nodes[parent].set_child(side, new);
            }
            None => self.root = new,
        }
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    /// Rotates the subtree at `id` so that `id` moves down towards `dir` and
    /// its child on the opposite side takes its place (`Dir::Left` is a left
    /// rotation). Returns the new subtree root. Colors are left alone.
    ///
    /// ```text
    ///        id                  pivot
    ///       /  \    (Left)       /   \
    ///      a   pivot   =>      id     c
    ///          /   \          /  \
    ///         b     c        a    b
    /// ```
    pub(super) fn rotate(&mut self, id: NodeId, dir: Dir) -> NodeId {
        let pivot = self.child(id, dir.opposite())
            .expect("rotation needs a child on the side that moves up");
        let inner = self.child(pivot, dir);

        self.nodes[id].set_child(dir.opposite(), inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(id);
        }

        let parent = self.parent(id);
        self.replace_child(parent, id, Some(pivot));

        self.nodes[pivot].set_child(dir, Some(id));
        self.nodes[id].parent = Some(pivot);
        pivot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shape of the tree as nested (left, key, right) triples.
    fn shape(tree: &RBTree<i32>, id: Option<NodeId>) -> String {
        match id {
            None => ".".to_string(),
            Some(id) => format!(
                "({} {} {})",
                shape(tree, tree.child(id, Dir::Left)),
                tree.nodes[id].key,
                shape(tree, tree.child(id, Dir::Right)),
            ),
        }
    }

    fn id_of(tree: &RBTree<i32>, key: i32) -> NodeId {
        tree.nodes.iter().find(|(_, node)| node.key == key).map(|(id, _)| id).unwrap()
    }

    fn assert_links(tree: &RBTree<i32>) {
        if let Some(root) = tree.root {
            assert_eq!(tree.parent(root), None);
        }
        for (id, node) in tree.nodes.iter() {
            for dir in [Dir::Left, Dir::Right] {
                if let Some(child) = node.child(dir) {
                    assert_eq!(tree.parent(child), Some(id));
                }
            }
        }
    }

    #[test]
    fn rotate_root_and_back() {
        let mut tree: RBTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        assert_eq!(shape(&tree, tree.root), "(((. 1 .) 2 (. 3 .)) 4 ((. 5 .) 6 (. 7 .)))");

        let root = tree.root.unwrap();
        let new_root = tree.rotate(root, Dir::Left);
        assert_eq!(tree.root, Some(new_root));
        assert_eq!(tree.nodes[new_root].key, 6);
        assert_eq!(shape(&tree, tree.root), "((((. 1 .) 2 (. 3 .)) 4 (. 5 .)) 6 (. 7 .))");
        assert_links(&tree);

        let back = tree.rotate(new_root, Dir::Right);
        assert_eq!(tree.nodes[back].key, 4);
        assert_eq!(shape(&tree, tree.root), "(((. 1 .) 2 (. 3 .)) 4 ((. 5 .) 6 (. 7 .)))");
        assert_links(&tree);
    }

    #[test]
    fn rotate_inner_node() {
        let mut tree: RBTree<i32> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
        let two = id_of(&tree, 2);
        let one = tree.rotate(two, Dir::Right);
        assert_eq!(tree.nodes[one].key, 1);
        assert_eq!(tree.parent(one), tree.root);
        assert_eq!(shape(&tree, tree.root), "((. 1 (. 2 (. 3 .))) 4 ((. 5 .) 6 (. 7 .)))");
        assert_links(&tree);
    }

    #[test]
    fn step_walks_in_order() {
        let tree: RBTree<i32> = (1..=20).collect();
        let mut id = tree.extreme(tree.root.unwrap(), Dir::Left);
        let mut keys = vec![tree.nodes[id].key];
        while let Some(next) = tree.step(id, Dir::Right) {
            keys.push(tree.nodes[next].key);
            id = next;
        }
        assert_eq!(keys, (1..=20).collect::<Vec<_>>());
        assert_eq!(tree.step(tree.extreme(tree.root.unwrap(), Dir::Left), Dir::Left), None);
    }
}
