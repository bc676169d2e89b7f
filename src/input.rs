use std::sync::Arc;

use crate::node::Node;

/// A single live `(rule, start)` activation on the call stack: the seed
/// consulted when the engine re-enters the same rule at the same offset.
#[derive(Clone, Debug)]
pub(crate) struct ActivationEntry {
    pub name: Arc<str>,
    pub start: usize,
    pub ok: bool,
    pub length: usize,
    pub node: Option<Node>,
}

/// An immutable byte buffer plus the mutable activation stack the engine
/// uses to detect and grow left-recursive invocations.
///
/// One `Input` belongs to exactly one in-flight parse; its activation stack
/// must be empty both when a top-level `Call` begins and when it returns.
/// `Input` is `Send` (its fields are all owned, non-`Rc` data) so one can be
/// built on one thread and moved to another to parse independently and
/// concurrently against a shared `Set` (spec §5).
pub struct Input {
    text: Vec<u8>,
    stack: Vec<ActivationEntry>,
}

impl Input {
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        Input {
            text: text.into(),
            stack: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub(crate) fn stack_len(&self) -> usize {
        self.stack.len()
    }

    /// Scans newest-to-oldest for a live activation of `name` at `start`.
    pub(crate) fn find_activation(&self, name: &str, start: usize) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|entry| entry.start == start && entry.name.as_ref() == name)
    }

    pub(crate) fn activation(&self, index: usize) -> &ActivationEntry {
        &self.stack[index]
    }

    pub(crate) fn push_activation(&mut self, name: &str, start: usize) {
        self.stack.push(ActivationEntry {
            name: Arc::from(name),
            start,
            ok: false,
            length: 0,
            node: None,
        });
    }

    /// Discards every entry pushed after `len`, keeping the first `len`.
    pub(crate) fn truncate_stack(&mut self, len: usize) {
        self.stack.truncate(len);
    }

    /// Updates the topmost activation entry with a new best-so-far result,
    /// so a nested re-entry sees the larger seed on its next scan.
    pub(crate) fn update_top(&mut self, ok: bool, length: usize, node: Option<Node>) {
        if let Some(top) = self.stack.last_mut() {
            top.ok = ok;
            top.length = length;
            top.node = node;
        }
    }
}
