//! # compact_trie
//!
//! A compressed prefix tree (radix-style trie) over sequences of symbols.
//!
//! Sequences share storage along common prefixes. Inserting a sequence that
//! diverges from a stored edge splits that edge; a sequence that continues
//! past a node is grafted onto the child with the same leading symbol.
//!
//! ## Core Concepts
//!
//! - **Label**: the compressed edge stored on a node
//! - **Terminal**: an end-of-sequence marker closing a stored sequence
//! - **Split**: breaking a label where an inserted sequence diverges
//! - **Merge**: grafting a suffix onto a child with a matching first symbol
//!
//! ## Example
//!
//! ```
//! use compact_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add_str("hi_").unwrap();
//! trie.add_str("hi_there").unwrap();
//!
//! let mut words = trie.words().unwrap();
//! words.sort();
//! assert_eq!(words, vec!["hi_", "hi_there"]);
//! ```

pub mod trie;

mod error;

pub use error::{Error, Result};
pub use trie::{Slot, Trie};
