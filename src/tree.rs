//! The tree itself. Every node is owned by exactly one parent link (the root by the
//! [`BinaryTree`]) so the whole structure is a plain tree of `Box`es with no parent pointers.
//!
//! # Examples
//!
//! ```
//! use binary_tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! assert!(tree.add(1));
//! assert!(tree.contains(1));
//!
//! // Adding the same key again does nothing.
//! assert!(!tree.add(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing a key returns it.
//! assert_eq!(tree.remove(1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

/// The slot a node hangs from. `None` marks the empty spot at the bottom of a subtree.
pub(crate) type Link = Option<Box<Node>>;

/// An unbalanced Binary Search Tree of unique `i32` keys ordered numerically.
///
/// The tree keeps a running count of its keys so [`size`](Self::size) is `O(1)`. All other
/// operations are `O(height)`.
///
/// Equality is structural: two trees are equal when they have the same shape and keys, so the
/// same keys added in a different order can make unequal trees.
#[derive(Default)]
pub struct BinaryTree {
    root: Link,
    size: usize,
}

pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// Walks down from `link` towards `key`. Returns the link holding `key` if it is stored, or the
/// empty link where it would be inserted otherwise.
fn locate(mut link: &mut Link, key: i32) -> &mut Link {
    while link.as_ref().is_some_and(|node| node.value != key) {
        let Some(node) = link else {
            unreachable!("loop condition checked the link is occupied");
        };
        link = if key < node.value {
            &mut node.left
        } else {
            &mut node.right
        };
    }
    link
}

/// Detaches the smallest node hanging from `link`, puts its right child in its place and returns
/// its key. Returns `None` if `link` is empty.
fn pop_min(mut link: &mut Link) -> Option<i32> {
    while link.as_ref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = link else {
            unreachable!("loop condition checked the link is occupied");
        };
        link = &mut node.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min.value)
}

impl BinaryTree {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Adds `key` to the tree. Returns `false` without changing anything if the key is already
    /// present, `true` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    ///
    /// assert!(tree.add(2));
    /// assert!(tree.add(1));
    /// assert!(!tree.add(2));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn add(&mut self, key: i32) -> bool {
        let slot = locate(&mut self.root, key);
        if slot.is_some() {
            return false;
        }

        *slot = Some(Node::new_boxed(key));
        self.size += 1;
        true
    }

    /// Adds every key in `keys`, in order. Keys already in the tree (including ones repeated
    /// earlier in `keys`) are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.add_all([3, 1, 3, 2]);
    ///
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.to_string(), "[1, 2, 3]");
    /// ```
    pub fn add_all<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = i32>,
    {
        for key in keys {
            self.add(key);
        }
    }

    /// Removes `key` from the tree and returns it. If the tree does not contain `key`, nothing
    /// happens and `None` is returned.
    ///
    /// A node with two children is not unlinked. Instead it takes the key of its in-order
    /// successor (the smallest key of its right subtree) and that successor node is spliced out.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::from([5, 3, 8]);
    ///
    /// assert_eq!(tree.remove(5), Some(5));
    /// assert_eq!(tree.remove(5), None);
    /// assert_eq!(tree.to_string(), "[3, 8]");
    /// ```
    pub fn remove(&mut self, key: i32) -> Option<i32> {
        let slot = locate(&mut self.root, key);
        let mut node = slot.take()?;

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                node.value = pop_min(&mut right).expect("Two children implies a right subtree");
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        self.size -= 1;

        Some(key)
    }

    /// Returns `true` if `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let tree = BinaryTree::from([1, 2]);
    ///
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: i32) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// The number of keys in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a lone root a height
    /// of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// // Ascending insertion degenerates into a list.
    /// let tree: BinaryTree = (0..10).collect();
    /// assert_eq!(tree.height(), 10);
    ///
    /// let tree = BinaryTree::from([2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// An iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let tree = BinaryTree::from([3, 1, 2]);
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(&self.root);
        iter
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl Drop for BinaryTree {
    fn drop(&mut self) {
        // Detach children before each node is dropped so dropping never recurses.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for BinaryTree {
    fn clone(&self) -> Self {
        let mut root = None;
        let mut stack: Vec<(&Node, &mut Link)> = Vec::new();
        if let Some(node) = self.root() {
            stack.push((node, &mut root));
        }
        while let Some((source, slot)) = stack.pop() {
            let node = slot.insert(Node::new_boxed(source.value));
            let Node { left, right, .. } = &mut **node;
            stack.extend(source.left.as_deref().map(|n| (n, left)));
            stack.extend(source.right.as_deref().map(|n| (n, right)));
        }

        Self {
            root,
            size: self.size,
        }
    }
}

impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        let mut stack = vec![(self.root(), other.root())];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.value == b.value => {
                    stack.push((a.left.as_deref(), b.left.as_deref()));
                    stack.push((a.right.as_deref(), b.right.as_deref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for BinaryTree {}

impl fmt::Debug for BinaryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("size", &self.size)
            .field("keys", &self.iter())
            .finish()
    }
}

impl Extend<i32> for BinaryTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, keys: I) {
        self.add_all(keys);
    }
}

impl FromIterator<i32> for BinaryTree {
    fn from_iter<I: IntoIterator<Item = i32>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.add_all(keys);
        tree
    }
}

impl<const N: usize> From<[i32; N]> for BinaryTree {
    fn from(keys: [i32; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl From<&[i32]> for BinaryTree {
    fn from(keys: &[i32]) -> Self {
        keys.iter().copied().collect()
    }
}

/// In-order iterator over the keys of a [`BinaryTree`], created by [`BinaryTree::iter`].
///
/// The stack holds the nodes whose left subtree has been visited but which haven't been yielded
/// yet, so it never grows past the height of the tree.
#[derive(Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(node.value)
    }
}

impl<'a> IntoIterator for &'a BinaryTree {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Checks the BST invariant on every node and that `size` matches the node count.
#[cfg(test)]
pub(crate) fn assert_invariants(tree: &BinaryTree) {
    let mut count = 0;
    let mut stack = vec![(tree.root(), i64::MIN, i64::MAX)];
    while let Some((link, low, high)) = stack.pop() {
        let Some(node) = link else {
            continue;
        };
        let value = i64::from(node.value);
        assert!(low < value && value < high, "{} outside ({}, {})", value, low, high);
        count += 1;
        stack.push((node.left.as_deref(), low, value));
        stack.push((node.right.as_deref(), value, high));
    }
    assert_eq!(count, tree.size());
}
