//! Compressed trie over symbol sequences
//!
//! The tree is a single recursive node type:
//! - Each node carries a label, the compressed edge from its parent
//! - Sibling labels start with distinct symbols
//! - A label ending in [`Slot::End`] closes a stored sequence

mod node;
mod tree;

pub use node::{Slot, Trie};
