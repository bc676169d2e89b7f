//! Fatal-error signaling.
//!
//! Ordinary match failure is never an error: it's the `false` in a parser's
//! `(bool, usize, Option<Node>)` return. The three conditions below are user
//! misconfiguration or malformed input, and the source (`paza`, the Go
//! library this crate generalizes) signals them by panicking and unwinding
//! to the caller of the outermost `Call`. We keep that shape: these are
//! `panic!`s, not `Result`s, so a fatal error always unwinds the whole parse
//! rather than letting a combinator swallow it as an ordinary failure.

/// A rule name with no registered parser was invoked.
pub(crate) fn parser_not_found(name: &str) -> ! {
    panic!("parser not found: {name}")
}

/// Invalid UTF-8 was encountered while decoding a rune at a match position.
pub(crate) fn utf8_decode_error() -> ! {
    panic!("utf8 decode error")
}

/// A rule was registered under an empty name.
pub(crate) fn empty_parser_name() -> ! {
    panic!("empty parser name")
}
