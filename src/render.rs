//! Textual forms of a [`BinaryTree`].

use std::fmt::{self, Write};

use crate::tree::{BinaryTree, Node};

/// Repeated once per level of depth in [`BinaryTree::as_tree_string`].
const INDENT: &str = "-~-";

/// Lists the keys in ascending order, e.g. `[1, 2, 3]`. An empty tree is `[]`.
impl fmt::Display for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", key)?;
        }
        f.write_char(']')
    }
}

impl BinaryTree {
    /// Draws the tree rotated a quarter turn counter-clockwise: one key per line, indented by
    /// its depth, with the right subtree above its parent and the left subtree below. The root
    /// is the only unindented line, the largest key is at the top and the smallest at the bottom.
    ///
    /// This is a debugging aid.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let tree = BinaryTree::from([3, 1, 2, 5, 6, 4, 0]);
    ///
    /// let expected = "\
    /// -~--~-  6
    /// -~-  5
    /// -~--~-  4
    ///   3
    /// -~--~-  2
    /// -~-  1
    /// -~--~-  0
    /// ";
    /// assert_eq!(tree.as_tree_string(), expected);
    /// ```
    pub fn as_tree_string(&self) -> String {
        let mut out = String::new();
        // Reverse in-order walk: everything on the stack is still waiting to be drawn, and
        // everything right of it already has been.
        let mut stack = Vec::new();
        push_right_spine(&mut stack, self.root(), 0);
        while let Some((node, depth)) = stack.pop() {
            out.push_str(&INDENT.repeat(depth));
            out.push_str(&format!("{:>3}\n", node.value));
            push_right_spine(&mut stack, node.left.as_deref(), depth + 1);
        }
        out
    }
}

fn push_right_spine<'a>(
    stack: &mut Vec<(&'a Node, usize)>,
    mut node: Option<&'a Node>,
    mut depth: usize,
) {
    while let Some(n) = node {
        stack.push((n, depth));
        node = n.right.as_deref();
        depth += 1;
    }
}
