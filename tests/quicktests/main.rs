//! Tests over the public API of `BinaryTree`.

mod properties;
mod scenarios;
