//! The seed-and-grow invocation engine (spec §4.3).
//!
//! Every rule is treated as potentially left-recursive; there is no
//! `recursive` flag distinguishing a fast path the way the source's
//! `info.recursive` did; the activation stack and fixed-point loop below run
//! uniformly for every rule. A non-recursive rule just happens to settle
//! after its second iteration (the repeated match has equal length, so the
//! loop stops at the "length stabilised" case).

use crate::input::Input;
use crate::node::Node;
use crate::parser::ParseOutcome;
use crate::set::Set;

/// Extra stack `stacker::maybe_grow` reserves per recursive descent. The
/// engine recurses once per grammar nesting level per grow iteration, so
/// deeply nested grammars on long inputs can run the native stack out;
/// Parsley guards against exactly this in its own recursive-descent parser.
const RED_ZONE: usize = 32 * 1024;
const STACK_SIZE: usize = 1024 * 1024;

pub(crate) fn call(set: &Set, name: &str, input: &mut Input, start: usize) -> ParseOutcome {
    // Step 1: boundary.
    if start >= input.len() {
        return (false, 0, None);
    }

    // Step 2: resolve the parser, panicking (fatal) if `name` is unknown.
    let parser = set.lookup(name);

    // Step 3: re-entry check, scanning newest-to-oldest.
    if let Some(index) = input.find_activation(name, start) {
        let entry = input.activation(index);
        let (ok, length, node) = (entry.ok, entry.length, entry.node.clone());
        return (ok, length, finalize(node, name));
    }

    set.trace_enter(name, input, start);

    // Step 4: seed install.
    let before = input.stack_len();
    input.push_activation(name, start);
    let seed_size = input.stack_len();

    // Step 5: grow loop.
    let mut last_ok = false;
    let mut last_len = 0usize;
    let mut last_node: Option<Node> = None;

    let (ok, length, node) = loop {
        let (ok, len, node) = stacker::maybe_grow(RED_ZONE, STACK_SIZE, || parser(set, input, start));

        // Discard entries pushed for nested sub-rules; the seed entry itself
        // (at `seed_size - 1`) survives this truncation.
        input.truncate_stack(seed_size);

        if !ok {
            break if last_ok {
                (last_ok, last_len, last_node.take())
            } else {
                (false, 0, None)
            };
        }

        if len < last_len {
            // Overshot the fixed point: the previous iteration was the peak.
            break (last_ok, last_len, last_node.take());
        }

        if len == last_len {
            // Length has stabilised; prefer the freshest subtree.
            break (ok, len, node);
        }

        // Strictly longer: record the new best and let a nested re-entry
        // see the larger seed on its next scan.
        last_ok = ok;
        last_len = len;
        last_node = node.clone();
        input.update_top(ok, len, node);
    };

    // Step 6 / unwind: drop our own activation entry before returning.
    input.truncate_stack(before);

    set.trace_leave(name, input, start, ok, length);

    (ok, length, finalize(node, name))
}

fn finalize(node: Option<Node>, name: &str) -> Option<Node> {
    node.map(|n| n.named(name))
}
