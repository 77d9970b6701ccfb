use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::BinaryTree;

/// Errors returned when parsing a [`BinaryTree`] from its bracketed listing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseTreeError {
    /// The text does not start with `[` and end with `]`.
    #[error("expected a listing enclosed in '[' and ']'")]
    Unbracketed,
    /// An element of the listing is empty, as in `[1, , 3]`.
    #[error("missing key at position {position}")]
    MissingKey {
        /// Zero-based index of the empty element.
        position: usize,
    },
    /// An element of the listing is not an `i32`.
    #[error("invalid key at position {position}")]
    InvalidKey {
        /// Zero-based index of the offending element.
        position: usize,
        /// Why the element didn't parse.
        #[source]
        source: ParseIntError,
    },
}

/// Parses the [`Display`](std::fmt::Display) form of a tree, e.g. `[1, 2, 3]`. Keys are added in
/// the listed order and repeats are skipped, as with [`BinaryTree::add_all`].
///
/// # Examples
///
/// ```
/// use binary_tree::{BinaryTree, ParseTreeError};
///
/// let tree: BinaryTree = "[2, 1, 3]".parse().unwrap();
/// assert_eq!(tree.to_string(), "[1, 2, 3]");
///
/// assert_eq!(
///     "[1, , 3]".parse::<BinaryTree>(),
///     Err(ParseTreeError::MissingKey { position: 1 })
/// );
/// ```
impl FromStr for BinaryTree {
    type Err = ParseTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or(ParseTreeError::Unbracketed)?;

        let mut tree = Self::new();
        if inner.trim().is_empty() {
            return Ok(tree);
        }

        for (position, element) in inner.split(',').enumerate() {
            let element = element.trim();
            if element.is_empty() {
                return Err(ParseTreeError::MissingKey { position });
            }
            let key = element
                .parse::<i32>()
                .map_err(|source| ParseTreeError::InvalidKey { position, source })?;
            tree.add(key);
        }

        Ok(tree)
    }
}
