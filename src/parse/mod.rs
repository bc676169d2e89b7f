//! The invocation engine. Kept under its own submodule because that's where
//! the Parsley crate this repository started from puts its parsing
//! algorithms (`parse/backtracking_parser.rs`, `parse/gss_parser.rs`) — here
//! there's exactly one, the seed-and-grow engine behind `Set::call`.

pub(crate) mod call;
