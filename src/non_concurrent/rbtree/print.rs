use std::fmt::Display;
use std::io;

use super::RBTree;
use super::node::{Dir, NodeId};

/// Spaces per level of depth.
const INDENT: usize = 4;

impl<T: Display> RBTree<T> {
    /// Writes the tree sideways: the right subtree first, then the node
    /// indented by its depth, then the left subtree. Each node is followed
    /// by its color, `(R)` or `(B)`.
    ///
    /// ```text
    ///     3 (R)
    /// 2 (B)
    ///     1 (R)
    /// ```
    pub fn print_tree<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        match self.root {
            Some(root) => self.print_subtree(root, 0, out),
            None => writeln!(out, "Empty tree"),
        }
    }

    fn print_subtree<W: io::Write>(&self, id: NodeId, depth: usize, out: &mut W) -> io::Result<()> {
        let node = &self.nodes[id];
        if let Some(right) = node.child(Dir::Right) {
            self.print_subtree(right, depth + 1, out)?;
        }
        writeln!(out, "{:width$}{} ({})", "", node.key, node.color, width = depth * INDENT)?;
        if let Some(left) = node.child(Dir::Left) {
            self.print_subtree(left, depth + 1, out)?;
        }
        Ok(())
    }
}
