//! Trie node types

use serde::Serialize;

/// One position in a node label
///
/// Caller symbols are wrapped in [`Slot::Sym`]. [`Slot::End`] is the terminal
/// sentinel appended to every inserted sequence; it cannot collide with any
/// caller symbol, so every alphabet is usable as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Slot<S> {
    /// A caller-supplied symbol
    Sym(S),
    /// End of a stored sequence
    End,
}

impl<S> Slot<S> {
    /// Check if this is the terminal sentinel
    pub fn is_end(&self) -> bool {
        matches!(self, Slot::End)
    }

    /// Get the wrapped symbol, if any
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Slot::Sym(s) => Some(s),
            Slot::End => None,
        }
    }
}

/// A node in the compressed trie
///
/// The root is an ordinary node with an empty label; every other node has a
/// non-empty label. Children are kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Trie<S> {
    pub(crate) label: Vec<Slot<S>>,
    pub(crate) children: Vec<Trie<S>>,
}

impl<S> Trie<S> {
    /// Create a new empty trie
    pub fn new() -> Self {
        Trie {
            label: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a childless node holding `label`
    pub(crate) fn leaf(label: Vec<Slot<S>>) -> Self {
        Trie {
            label,
            children: Vec::new(),
        }
    }

    /// Create a node that adopts an existing set of children
    pub(crate) fn branch(label: Vec<Slot<S>>, children: Vec<Trie<S>>) -> Self {
        Trie { label, children }
    }

    /// The compressed edge leading to this node
    pub fn label(&self) -> &[Slot<S>] {
        &self.label
    }

    /// Child nodes in insertion order
    pub fn children(&self) -> &[Trie<S>] {
        &self.children
    }

    /// Check if a stored sequence ends at this node
    pub fn is_terminal(&self) -> bool {
        self.label.last().is_some_and(Slot::is_end)
    }

    /// Check if nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.label.is_empty() && self.children.is_empty()
    }
}

impl<S> Default for Trie<S> {
    fn default() -> Self {
        Trie::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trie_is_empty() {
        let trie: Trie<char> = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.is_terminal());
        assert!(trie.label().is_empty());
        assert!(trie.children().is_empty());
    }

    #[test]
    fn test_terminal_detection() {
        let node = Trie::leaf(vec![Slot::Sym('a'), Slot::End]);
        assert!(node.is_terminal());
        assert!(!node.is_empty());

        let inner = Trie::branch(vec![Slot::Sym('a')], vec![node]);
        assert!(!inner.is_terminal());
    }

    #[test]
    fn test_slot_accessors() {
        assert_eq!(Slot::Sym('x').symbol(), Some(&'x'));
        assert_eq!(Slot::<char>::End.symbol(), None);
        assert!(Slot::<char>::End.is_end());
        assert_ne!(Slot::Sym('x'), Slot::End);
    }

    #[test]
    fn test_serialize_shape() {
        let node = Trie::leaf(vec![Slot::Sym('a'), Slot::End]);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": [{"Sym": "a"}, "End"],
                "children": []
            })
        );
    }
}
