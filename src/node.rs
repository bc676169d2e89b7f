use std::io::{self, Write};

use crate::input::Input;

/// A single node of a parse tree.
///
/// `name` is assigned by the invocation engine when a rule's `Call` returns,
/// not by the matcher or combinator that produced the node — primitives and
/// combinators build nodes with an empty name and let the engine stamp it.
///
/// `subs` holds one slot per operand (for `Concat`) or per iteration (for
/// `Repeat`), or exactly one slot (for `OrdChoice`) — a slot is `None` when
/// that operand matched but produced no node of its own (a zero-width
/// `Predicate`/`NotPredicate`). The slot still exists: "absent vs. present
/// children are unequal" (see `equal` below) only holds if absence is a
/// distinct value in the list rather than an omitted element.
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub name: String,
    pub start: usize,
    pub len: usize,
    pub subs: Vec<Option<Node>>,
}

impl Node {
    pub fn new(name: impl Into<String>, start: usize, len: usize, subs: Vec<Option<Node>>) -> Self {
        Node {
            name: name.into(),
            start,
            len,
            subs,
        }
    }

    pub(crate) fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Renders the tree rooted at `self`, one line per node, indented two
    /// spaces per nesting level: `"<text>" <name> <start>-<end>`.
    pub fn dump<W: Write>(&self, writer: &mut W, input: &Input) -> io::Result<()> {
        self.dump_at(writer, input, 0)
    }

    fn dump_at<W: Write>(&self, writer: &mut W, input: &Input, level: usize) -> io::Result<()> {
        let end = self.start + self.len;
        let text = String::from_utf8_lossy(&input.text()[self.start..end]);
        writeln!(
            writer,
            "{}{:?} {} {}-{}",
            "  ".repeat(level),
            text,
            self.name,
            self.start,
            end
        )?;
        for sub in self.subs.iter().flatten() {
            sub.dump_at(writer, input, level + 1)?;
        }
        Ok(())
    }

    /// Structural equality on `(name, start, len, subs)`. Subtree lists are
    /// compared with `itertools::equal`, which (unlike `zip`) treats a
    /// shorter or longer list of children as unequal rather than silently
    /// ignoring the extra elements; comparing `Option<Node>` slots
    /// element-wise also makes an absent child unequal to any present one.
    pub fn equal(&self, other: &Node) -> bool {
        self.name == other.name
            && self.start == other.start
            && self.len == other.len
            && itertools::equal(self.subs.iter(), other.subs.iter())
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}
