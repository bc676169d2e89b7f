use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::error;
use crate::input::Input;
use crate::parse;
use crate::parser::{Operand, Parser, ParseOutcome};

type EnterHook = Box<dyn Fn(&str, &Input, usize) + Send + Sync>;
type LeaveHook = Box<dyn Fn(&str, &Input, usize, bool, usize) + Send + Sync>;

/// The rule registry. Maps rule names to parsers and mints anonymous names
/// for inline parsers passed directly to a combinator.
///
/// Registration methods take `&self`, not `&mut self`: grammars are written
/// in the style `set.add("expr", set.ord_choice([...]))`, which needs two
/// live references into `set` in the same expression. The source gets this
/// for free from Go's pointer receivers; here it's interior mutability
/// (`RwLock`) over the parser map and an atomic serial counter. `RwLock`
/// rather than `RefCell` because spec §5 requires a completed `Set` to be
/// shareable across threads ("multiple independent `Input`s may parse
/// concurrently against the same `Set`"), which rules out `Rc`/`RefCell`
/// (both `!Sync`) no matter how read-only the registry is by then.
///
/// A `Set` is read-only once a parse is underway — registering rules
/// concurrently with an active `Call` is not supported (§5).
pub struct Set {
    parsers: RwLock<HashMap<String, Parser>>,
    serial: AtomicU64,
    enter: RwLock<Option<EnterHook>>,
    leave: RwLock<Option<LeaveHook>>,
}

impl Default for Set {
    fn default() -> Self {
        Self::new()
    }
}

impl Set {
    pub fn new() -> Self {
        Set {
            parsers: RwLock::new(HashMap::new()),
            serial: AtomicU64::new(0),
            enter: RwLock::new(None),
            leave: RwLock::new(None),
        }
    }

    /// Registers `parser` under `name`, overwriting any existing binding.
    /// Only the latest definition for a name is consulted at invocation
    /// time, which is what lets rules be mutually or self recursive.
    pub fn add(&self, name: impl Into<String>, parser: Parser) {
        let name = name.into();
        if name.is_empty() {
            error::empty_parser_name();
        }
        self.parsers.write().unwrap().insert(name, parser);
    }

    /// Registers `parser` under a freshly minted `__parser__<N>` name and
    /// returns that name. `N` comes from an atomically incremented counter,
    /// so a `Set` built from multiple threads still mints distinct names;
    /// once construction is done, reads need no synchronization.
    pub fn add_anonymous(&self, parser: Parser) -> String {
        let serial = self.serial.fetch_add(1, Ordering::SeqCst);
        let name = format!("__parser__{serial}");
        self.add(name.clone(), parser);
        name
    }

    /// Resolves a mixed list of rule names and bare parsers to a list of
    /// names, registering anonymous parsers for the latter as a side effect.
    pub(crate) fn resolve_names(&self, operands: impl IntoIterator<Item = Operand>) -> Vec<String> {
        operands
            .into_iter()
            .map(|operand| match operand {
                Operand::Name(name) => name,
                Operand::Func(parser) => self.add_anonymous(parser),
            })
            .collect()
    }

    pub(crate) fn lookup(&self, name: &str) -> Parser {
        match self.parsers.read().unwrap().get(name) {
            Some(parser) => Arc::clone(parser),
            None => error::parser_not_found(name),
        }
    }

    /// Installs a trace hook invoked on rule entry, before the underlying
    /// parser runs. Mirrors the source's `SetEnter`, which exists so a
    /// caller can build their own tracing or profiling on top of `Call`
    /// (see `prof/main.go` in the original).
    pub fn set_enter(&self, hook: impl Fn(&str, &Input, usize) + Send + Sync + 'static) {
        *self.enter.write().unwrap() = Some(Box::new(hook));
    }

    /// Installs a trace hook invoked on rule exit, after the underlying
    /// parser (and any left-recursive growth) has settled.
    pub fn set_leave(&self, hook: impl Fn(&str, &Input, usize, bool, usize) + Send + Sync + 'static) {
        *self.leave.write().unwrap() = Some(Box::new(hook));
    }

    pub(crate) fn trace_enter(&self, name: &str, input: &Input, start: usize) {
        log::trace!("-> {name} @ {start}");
        if let Some(hook) = self.enter.read().unwrap().as_ref() {
            hook(name, input, start);
        }
    }

    pub(crate) fn trace_leave(&self, name: &str, input: &Input, start: usize, ok: bool, length: usize) {
        log::trace!("<- {name} @ {start}: {ok} ({length})");
        if let Some(hook) = self.leave.read().unwrap().as_ref() {
            hook(name, input, start, ok, length);
        }
    }

    /// Dispatches `name` at `start`, driving the seed-and-grow fixed point
    /// that makes left-recursive rules terminate. See `parse::call` for the
    /// algorithm.
    pub fn call(&self, name: &str, input: &mut Input, start: usize) -> ParseOutcome {
        parse::call::call(self, name, input, start)
    }
}
