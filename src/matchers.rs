use std::sync::Arc;

use regex::Regex as Regexp;

use crate::error;
use crate::node::Node;
use crate::set::Set;

/// Decodes one UTF-8 code point starting at `start`, the way
/// `utf8.DecodeRune` does in the source: try successively longer prefixes of
/// the remaining bytes and accept the first one that's a complete, valid
/// code point. Returns `None` (rather than the replacement character) on
/// invalid UTF-8, since that's a fatal condition here, not a match failure.
fn decode_utf8_char(bytes: &[u8], start: usize) -> Option<(char, usize)> {
    let max_len = (bytes.len() - start).min(4);
    for len in 1..=max_len {
        if let Ok(s) = std::str::from_utf8(&bytes[start..start + len]) {
            if let Some(c) = s.chars().next() {
                return Some((c, len));
            }
        }
    }
    None
}

impl Set {
    /// Matches a single occurrence of the code point `r`.
    ///
    /// Invalid UTF-8 at `start` is a fatal error (spec §7), surfaced as a
    /// panic distinct from an ordinary non-match.
    pub fn rune(&self, r: char) -> crate::parser::Parser {
        Arc::new(move |_set: &Set, input: &mut crate::input::Input, start: usize| {
            if start >= input.len() {
                return (false, 0, None);
            }
            match decode_utf8_char(input.text(), start) {
                None => error::utf8_decode_error(),
                Some((c, len)) if c == r => (true, len, Some(Node::new("", start, len, vec![]))),
                Some(_) => (false, 0, None),
            }
        })
    }

    /// Registers [`Set::rune`] under `name` and returns `name`.
    pub fn named_rune(&self, name: impl Into<String>, r: char) -> String {
        let name = name.into();
        let parser = self.rune(r);
        self.add(name.clone(), parser);
        name
    }

    /// Matches a single byte that appears in `bs`.
    pub fn byte_in(&self, bs: impl Into<Vec<u8>>) -> crate::parser::Parser {
        let bs: Vec<u8> = bs.into();
        Arc::new(move |_set: &Set, input: &mut crate::input::Input, start: usize| {
            if start >= input.len() {
                return (false, 0, None);
            }
            if bs.contains(&input.text()[start]) {
                (true, 1, Some(Node::new("", start, 1, vec![])))
            } else {
                (false, 0, None)
            }
        })
    }

    pub fn named_byte_in(&self, name: impl Into<String>, bs: impl Into<Vec<u8>>) -> String {
        let name = name.into();
        let parser = self.byte_in(bs);
        self.add(name.clone(), parser);
        name
    }

    /// Matches a single byte in the inclusive range `[lo, hi]`.
    pub fn byte_range(&self, lo: u8, hi: u8) -> crate::parser::Parser {
        Arc::new(move |_set: &Set, input: &mut crate::input::Input, start: usize| {
            if start >= input.len() {
                return (false, 0, None);
            }
            let b = input.text()[start];
            if b >= lo && b <= hi {
                (true, 1, Some(Node::new("", start, 1, vec![])))
            } else {
                (false, 0, None)
            }
        })
    }

    pub fn named_byte_range(&self, name: impl Into<String>, lo: u8, hi: u8) -> String {
        let name = name.into();
        let parser = self.byte_range(lo, hi);
        self.add(name.clone(), parser);
        name
    }

    /// Matches `pattern` anchored at `start`: the match must begin exactly
    /// at offset 0 of the sub-slice starting at `start`, i.e. there's no
    /// implicit search forward. The pattern is compiled once, here, not on
    /// every match attempt.
    ///
    /// An invalid pattern is a fatal, compile-time error (spec §7).
    pub fn regex(&self, pattern: &str) -> crate::parser::Parser {
        let regex = Regexp::new(&anchor_pattern(pattern))
            .unwrap_or_else(|e| panic!("invalid regex pattern {pattern:?}: {e}"));
        Arc::new(move |_set: &Set, input: &mut crate::input::Input, start: usize| {
            if start >= input.len() {
                return (false, 0, None);
            }
            match regex.find(std::str::from_utf8(&input.text()[start..]).unwrap_or("")) {
                Some(m) if m.start() == 0 => {
                    let len = m.end();
                    (true, len, Some(Node::new("", start, len, vec![])))
                }
                _ => (false, 0, None),
            }
        })
    }

    pub fn named_regex(&self, name: impl Into<String>, pattern: &str) -> String {
        let name = name.into();
        let parser = self.regex(pattern);
        self.add(name.clone(), parser);
        name
    }
}

/// Forces the match to start at offset 0 of the searched slice, which is
/// what "anchored at `start`" means here, without requiring every caller to
/// remember to prefix their pattern with `^` (and without double-anchoring
/// patterns that already do).
fn anchor_pattern(pattern: &str) -> String {
    if pattern.starts_with('^') {
        pattern.to_string()
    } else {
        format!("^(?:{pattern})")
    }
}
