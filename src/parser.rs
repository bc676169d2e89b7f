use std::sync::Arc;

use crate::input::Input;
use crate::node::Node;
use crate::set::Set;

/// What a parser hands back: whether it matched, how many bytes it consumed
/// from its start position, and the subtree it built (absent on failure, or
/// for zero-width predicates).
pub type ParseOutcome = (bool, usize, Option<Node>);

/// A parser is a function from `(engine context, input, start)` to a match
/// outcome. The `&Set` parameter is how a combinator reaches back into the
/// engine to invoke its named sub-parsers — closures can't cleanly hold a
/// `&Set` of themselves, so it's threaded through the call instead (see
/// `Set::call`).
///
/// `Send + Sync` so a `Set` can be shared across threads once its grammar is
/// registered (spec §5: "multiple independent `Input`s may parse
/// concurrently against the same `Set`").
pub type Parser = Arc<dyn Fn(&Set, &mut Input, usize) -> ParseOutcome + Send + Sync>;

/// An operand accepted by a structural combinator: either the name of an
/// already-registered rule, or a bare parser that the combinator registers
/// under a freshly minted anonymous name before use.
///
/// The source (`paza`) accepts either a `string` or a `Parser` through a Go
/// `interface{}` parameter and panics at runtime on anything else. Rust's
/// type system makes that third case unrepresentable: `Operand` only has
/// these two variants, so "unknown operand type" can't occur here.
pub enum Operand {
    Name(String),
    Func(Parser),
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Name(name.to_string())
    }
}

impl From<String> for Operand {
    fn from(name: String) -> Self {
        Operand::Name(name)
    }
}

impl From<Parser> for Operand {
    fn from(parser: Parser) -> Self {
        Operand::Func(parser)
    }
}
