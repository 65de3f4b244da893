//! Insertion, splitting, merging and enumeration

use super::{Slot, Trie};
use crate::{Error, Result};
use std::fmt::{self, Write};
use tracing::{debug, trace};

impl<S: Clone + Eq> Trie<S> {
    /// Build a trie from a sequence of words
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[S]>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.add(word.as_ref())?;
        }
        Ok(trie)
    }

    /// Insert a sequence of symbols
    ///
    /// Inserting a sequence that is already stored leaves the tree unchanged.
    pub fn add(&mut self, word: &[S]) -> Result<()> {
        let mut terminated: Vec<Slot<S>> = word.iter().cloned().map(Slot::Sym).collect();
        terminated.push(Slot::End);
        debug!(len = word.len(), "adding word");
        self.insert(&terminated)
    }

    /// Graft a terminated suffix onto this node
    ///
    /// Only succeeds when the suffix starts with the same symbol as this
    /// node's label; otherwise returns [`Error::MergeMismatch`] and leaves the
    /// node untouched.
    pub(crate) fn merge(&mut self, suffix: &[Slot<S>]) -> Result<()> {
        let head = self.label.first().ok_or_else(|| {
            Error::InvariantViolation("merge target has an empty label".to_string())
        })?;
        if suffix.first() != Some(head) {
            return Err(Error::MergeMismatch);
        }
        self.insert(suffix)
    }

    /// All stored sequences, in depth-first order
    pub fn all_words(&self) -> Result<Vec<Vec<S>>> {
        let mut words = Vec::new();
        let mut prefix = Vec::new();
        self.collect_words(&mut prefix, true, &mut words)?;
        Ok(words)
    }

    /// Check the structural invariants of the whole tree
    pub fn validate(&self) -> Result<()> {
        self.validate_node(true)
    }

    /// Number of stored sequences
    pub fn len(&self) -> usize {
        let own = usize::from(self.is_terminal());
        own + self.children.iter().map(Trie::len).sum::<usize>()
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Trie::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path, in edges
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    // === Internal helpers ===

    fn insert(&mut self, word: &[Slot<S>]) -> Result<()> {
        // Only a fresh root is completely empty.
        if self.is_empty() {
            self.label = word.to_vec();
            return Ok(());
        }

        for (i, slot) in word.iter().enumerate() {
            if i >= self.label.len() {
                return self.graft(&word[i..]);
            }

            if *slot == self.label[i] {
                continue;
            }

            if slot.is_end() {
                // The word is a strict prefix of this label.
                self.split_terminal(i);
            } else {
                self.split(i, &word[i..]);
            }
            return Ok(());
        }

        // The terminated word matched the whole label: already stored.
        trace!("word already present");
        Ok(())
    }

    /// Hand the remaining suffix to the first child that accepts it, or
    /// append it as a new child.
    fn graft(&mut self, rest: &[Slot<S>]) -> Result<()> {
        for child in &mut self.children {
            match child.merge(rest) {
                Ok(()) => return Ok(()),
                Err(Error::MergeMismatch) => continue,
                Err(e) => return Err(e),
            }
        }

        trace!(len = rest.len(), "appending new child");
        self.children.push(Trie::leaf(rest.to_vec()));
        Ok(())
    }

    /// Split where the word diverges from this label. The old continuation
    /// keeps the existing children; the new branch goes after it.
    fn split(&mut self, at: usize, rest: &[Slot<S>]) {
        trace!(at, "splitting on divergence");
        let tail = self.label.split_off(at);
        let old = Trie::branch(tail, std::mem::take(&mut self.children));
        self.children = vec![old, Trie::leaf(rest.to_vec())];
    }

    /// Split where the word ends inside this label.
    fn split_terminal(&mut self, at: usize) {
        trace!(at, "splitting on terminal");
        let tail = self.label.split_off(at);
        let old = Trie::branch(tail, std::mem::take(&mut self.children));
        self.children = vec![Trie::leaf(vec![Slot::End]), old];
    }

    fn collect_words(
        &self,
        prefix: &mut Vec<Slot<S>>,
        is_root: bool,
        words: &mut Vec<Vec<S>>,
    ) -> Result<()> {
        if !is_root && self.label.is_empty() {
            return Err(Error::InvariantViolation(
                "empty label on non-root node".to_string(),
            ));
        }

        let mark = prefix.len();
        prefix.extend_from_slice(&self.label);

        if let Some((Slot::End, body)) = prefix.split_last() {
            words.push(strip_terminal(body)?);
        }

        for child in &self.children {
            child.collect_words(prefix, false, words)?;
        }

        prefix.truncate(mark);
        Ok(())
    }

    fn validate_node(&self, is_root: bool) -> Result<()> {
        if !is_root && self.label.is_empty() {
            return Err(Error::InvariantViolation(
                "empty label on non-root node".to_string(),
            ));
        }

        if let Some(pos) = self.label.iter().position(Slot::is_end) {
            if pos + 1 != self.label.len() {
                return Err(Error::InvariantViolation(format!(
                    "terminal at position {} of a label of length {}",
                    pos,
                    self.label.len()
                )));
            }
            if !self.children.is_empty() {
                return Err(Error::InvariantViolation(
                    "terminal node has children".to_string(),
                ));
            }
        }

        for (i, child) in self.children.iter().enumerate() {
            child.validate_node(false)?;
            let head = child.label.first();
            if self.children[..i]
                .iter()
                .any(|sibling| sibling.label.first() == head)
            {
                return Err(Error::InvariantViolation(format!(
                    "child {} shares a first symbol with an earlier sibling",
                    i
                )));
            }
        }

        Ok(())
    }
}

impl<S: fmt::Display> Trie<S> {
    /// Render the structure, one node per line
    ///
    /// Each line is indented with one `.` per level and shows the accumulated
    /// prefix followed by the node's own label; `$` marks a terminal. The
    /// root is omitted while its label is empty.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0, "");
        out
    }

    fn render_into(&self, out: &mut String, depth: usize, prefix: &str) {
        let mut here = prefix.to_string();
        for slot in &self.label {
            match slot {
                Slot::Sym(s) => {
                    let _ = write!(here, "{}", s);
                }
                Slot::End => here.push('$'),
            }
        }

        let child_depth = if depth == 0 && self.label.is_empty() {
            1
        } else {
            let _ = writeln!(out, "{}{}", ".".repeat(depth), here);
            depth + 1
        };

        for child in &self.children {
            child.render_into(out, child_depth, &here);
        }
    }
}

impl Trie<char> {
    /// Insert the characters of `word`
    pub fn add_str(&mut self, word: &str) -> Result<()> {
        let chars: Vec<char> = word.chars().collect();
        self.add(&chars)
    }

    /// All stored words as strings
    pub fn words(&self) -> Result<Vec<String>> {
        Ok(self
            .all_words()?
            .into_iter()
            .map(|w| w.into_iter().collect())
            .collect())
    }
}

/// Unwrap the symbols of a path whose terminal has been removed
fn strip_terminal<S: Clone>(body: &[Slot<S>]) -> Result<Vec<S>> {
    body.iter()
        .map(|slot| {
            slot.symbol().cloned().ok_or_else(|| {
                Error::InvariantViolation("terminal found inside a stored path".to_string())
            })
        })
        .collect()
}
