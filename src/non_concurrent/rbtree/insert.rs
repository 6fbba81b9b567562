use log::trace;

use super::RBTree;
use super::node::{Color, Node, NodeId};
use super::search::SearchResult;

impl<T: Ord> RBTree<T> {
    /// Adds `key` to the tree. Inserting a key that is already present does
    /// nothing, the tree keeps its shape and colors.
    ///
    /// Complexity: O(log(n))
    pub fn insert(&mut self, key: T) {
        let (parent, dir) = match self.search_tree(&key) {
            SearchResult::Found(_) => {
                trace!("Ignoring duplicate insert");
                return
            }
            SearchResult::GoDown(None) => {
                let id = self.nodes.insert(Node::new(key, None));
                self.set_color(id, Color::Black);
                self.root = Some(id);
                return
            }
            SearchResult::GoDown(Some(slot)) => slot,
        };

        let id = self.nodes.insert(Node::new(key, Some(parent)));
        self.nodes[parent].set_child(dir, Some(id));
        self.insert_fixup(id);
    }

    /// Restores the coloring after `id` was attached as a red leaf, walking
    /// up from it.
    fn insert_fixup(&mut self, mut id: NodeId) {
        while let Some(parent) = self.parent(id) {
            if !self.is_red(Some(parent)) {
                break
            }
            let grandparent = self.parent(parent)
                .expect("a red node is never the root");
            let side = self.side_of(grandparent, parent);
            let uncle = self.child(grandparent, side.opposite());

            match uncle.filter(|&uncle| self.is_red(Some(uncle))) {
                Some(uncle) => {
                    // push the redness up and retry from the grandparent
                    trace!("Insert fix-up: recoloring below node {grandparent}");
                    self.set_color(parent, Color::Black);
                    self.set_color(uncle, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    id = grandparent;
                }
                None => {
                    // an inner grandchild is first turned into an outer one
                    let top = if self.side_of(parent, id) != side {
                        trace!("Insert fix-up: double rotation at node {grandparent}");
                        self.rotate(parent, side)
                    } else {
                        trace!("Insert fix-up: single rotation at node {grandparent}");
                        parent
                    };
                    self.rotate(grandparent, side.opposite());
                    self.set_color(top, Color::Black);
                    self.set_color(grandparent, Color::Red);
                    break
                }
            }
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}
