//! An ordered set backed by a red-black tree.
//!
//! The tree keeps its nodes in an arena and links them by index, so parent
//! back-references never own anything. Insertion repairs the coloring
//! bottom-up; removal pushes a red node down the search path ahead of the
//! physical delete, so there is never a "double black" to fix afterwards.

// not concurrent
pub mod non_concurrent;

pub use non_concurrent::rbtree::{IntoIter, Iter, RBTree, TreeError};
