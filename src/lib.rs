//! An unbalanced Binary Search Tree (BST) of unique `i32` keys.
//!
//! [`BinaryTree`] keeps its keys in nodes linked from a single root. Each node holds
//! one key and owns up to two children. Every key reachable through a node's left
//! child is smaller than the node's key, and every key reachable through its right
//! child is larger, so a key can be found (or found missing) by following one path
//! down from the root. Keys are never stored twice.
//!
//! Nothing rebalances the tree. Its shape is fixed by insertion order alone, and
//! lookups, insertions and removals cost one step per level on that path. Keys added
//! in ascending order form a single chain, with `height() == size()`. Removing a key
//! whose node has two children moves the next larger key (the smallest one in the
//! right subtree) into that node. The node that held it is then unlinked.
//!
//! Walking left subtree, node, then right subtree lists the keys in ascending order.
//! [`BinaryTree::iter`] and the [`Display`](std::fmt::Display) form `[1, 2, 3]` both use
//! that order, and [`BinaryTree::as_tree_string`] draws the shape itself.
//!
//! # Examples
//!
//! ```
//! use binary_tree::BinaryTree;
//!
//! let mut tree = BinaryTree::from([5, 3, 8]);
//! assert_eq!(tree.to_string(), "[3, 5, 8]");
//!
//! // Keys are unique.
//! assert!(!tree.add(3));
//! assert_eq!(tree.size(), 3);
//!
//! // Removing returns the key that was removed.
//! assert_eq!(tree.remove(5), Some(5));
//! assert_eq!(tree.remove(99), None);
//! assert_eq!(tree.to_string(), "[3, 8]");
//! ```

#![deny(missing_docs)]

mod parse;
mod render;
pub mod tree;


pub use parse::ParseTreeError;
pub use tree::{BinaryTree, Iter};
