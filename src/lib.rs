//! Packrat-style parser combinators with support for left-recursive
//! grammars.
//!
//! A grammar is a [`Set`] of named rules built from primitive matchers
//! ([`Set::rune`], [`Set::byte_in`], [`Set::byte_range`], [`Set::regex`])
//! and structural combinators ([`Set::concat`], [`Set::ord_choice`],
//! [`Set::repeat`] and its `one_or_more`/`zero_or_more` shorthands,
//! [`Set::predicate`]/[`Set::not_predicate`]). Parsing a rule against an
//! [`Input`] goes through [`Set::call`], which also terminates direct and
//! indirect left recursion via a seed-and-grow fixed point — see
//! `parse::call` for the algorithm.
//!
//! ```
//! use pakrat::Set;
//!
//! let set = Set::new();
//! let a = set.named_rune("a", 'a');
//! let plus = set.named_rune("+", '+');
//! set.add("expr", set.ord_choice([
//!     set.concat(["expr".into(), plus.into(), a.clone().into()]).into(),
//!     a.into(),
//! ]));
//!
//! let mut input = pakrat::Input::new(b"a+a+a".to_vec());
//! let (ok, len, _) = set.call("expr", &mut input, 0);
//! assert!(ok);
//! assert_eq!(len, 5);
//! ```

mod combinators;
mod error;
mod input;
mod matchers;
mod node;
mod parse;
mod parser;
mod set;

pub use input::Input;
pub use node::Node;
pub use parser::{Operand, ParseOutcome, Parser};
pub use set::Set;
