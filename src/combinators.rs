use std::sync::Arc;

use crate::input::Input;
use crate::node::Node;
use crate::parser::{Operand, Parser};
use crate::set::Set;

impl Set {
    /// Sequences its operands: each is invoked in turn, starting where the
    /// previous one left off. Fails as soon as one sub-parser fails — there
    /// is no backtracking within `Concat` itself; `OrdChoice` is what
    /// provides backtracking across alternatives.
    pub fn concat(&self, operands: impl IntoIterator<Item = Operand>) -> Parser {
        let names = self.resolve_names(operands);
        Arc::new(move |set: &Set, input: &mut Input, start: usize| {
            let mut index = start;
            let mut subs = Vec::with_capacity(names.len());
            for name in &names {
                let (ok, len, node) = set.call(name, input, index);
                if !ok {
                    return (false, 0, None);
                }
                index += len;
                subs.push(node);
            }
            (true, index - start, Some(Node::new("", start, index - start, subs)))
        })
    }

    pub fn named_concat(&self, name: impl Into<String>, operands: impl IntoIterator<Item = Operand>) -> String {
        let name = name.into();
        let parser = self.concat(operands);
        self.add(name.clone(), parser);
        name
    }

    /// Tries each operand in turn at the same start position and commits to
    /// the first one that succeeds — declaration order breaks ties, not
    /// match length. The winning branch's node becomes the single child of
    /// the result.
    pub fn ord_choice(&self, operands: impl IntoIterator<Item = Operand>) -> Parser {
        let names = self.resolve_names(operands);
        Arc::new(move |set: &Set, input: &mut Input, start: usize| {
            for name in &names {
                let (ok, len, node) = set.call(name, input, start);
                if ok {
                    return (true, len, Some(Node::new("", start, len, vec![node])));
                }
            }
            (false, 0, None)
        })
    }

    pub fn named_ord_choice(&self, name: impl Into<String>, operands: impl IntoIterator<Item = Operand>) -> String {
        let name = name.into();
        let parser = self.ord_choice(operands);
        self.add(name.clone(), parser);
        name
    }

    /// Greedily repeats `operand`, stopping when it fails or when `hi`
    /// iterations have been reached (`hi < 0` means unbounded). Fails if
    /// fewer than `lo` iterations succeeded.
    ///
    /// A successful zero-length iteration is accepted, not specially
    /// detected — a grammar where `operand` can match the empty string will
    /// make this loop forever. That restriction is on the grammar author,
    /// not defended against here (spec §9).
    pub fn repeat(&self, lo: usize, hi: isize, operand: impl Into<Operand>) -> Parser {
        let name = self.resolve_names(std::iter::once(operand.into()))
            .pop()
            .expect("resolve_names(single) yields exactly one name");
        Arc::new(move |set: &Set, input: &mut Input, start: usize| {
            let mut index = start;
            let mut subs = Vec::new();
            loop {
                let (ok, len, node) = set.call(&name, input, index);
                if !ok {
                    break;
                }
                index += len;
                subs.push(node);
                if hi > 0 && subs.len() as isize >= hi {
                    break;
                }
            }
            if subs.len() < lo {
                return (false, 0, None);
            }
            (true, index - start, Some(Node::new("", start, index - start, subs)))
        })
    }

    pub fn named_repeat(
        &self,
        name: impl Into<String>,
        lo: usize,
        hi: isize,
        operand: impl Into<Operand>,
    ) -> String {
        let name = name.into();
        let parser = self.repeat(lo, hi, operand);
        self.add(name.clone(), parser);
        name
    }

    /// `Repeat(1, -1, operand)`.
    pub fn one_or_more(&self, operand: impl Into<Operand>) -> Parser {
        self.repeat(1, -1, operand)
    }

    pub fn named_one_or_more(&self, name: impl Into<String>, operand: impl Into<Operand>) -> String {
        let name = name.into();
        let parser = self.one_or_more(operand);
        self.add(name.clone(), parser);
        name
    }

    /// `Repeat(0, -1, operand)`.
    pub fn zero_or_more(&self, operand: impl Into<Operand>) -> Parser {
        self.repeat(0, -1, operand)
    }

    pub fn named_zero_or_more(&self, name: impl Into<String>, operand: impl Into<Operand>) -> String {
        let name = name.into();
        let parser = self.zero_or_more(operand);
        self.add(name.clone(), parser);
        name
    }

    /// Zero-width lookahead: succeeds without consuming input iff `operand`
    /// would succeed at `start`.
    pub fn predicate(&self, operand: impl Into<Operand>) -> Parser {
        let name = self.resolve_names(std::iter::once(operand.into()))
            .pop()
            .expect("resolve_names(single) yields exactly one name");
        Arc::new(move |set: &Set, input: &mut Input, start: usize| {
            let (ok, _, _) = set.call(&name, input, start);
            (ok, 0, None)
        })
    }

    /// Zero-width negative lookahead: succeeds without consuming input iff
    /// `operand` would fail at `start`.
    pub fn not_predicate(&self, operand: impl Into<Operand>) -> Parser {
        let name = self.resolve_names(std::iter::once(operand.into()))
            .pop()
            .expect("resolve_names(single) yields exactly one name");
        Arc::new(move |set: &Set, input: &mut Input, start: usize| {
            let (ok, _, _) = set.call(&name, input, start);
            (!ok, 0, None)
        })
    }
}
