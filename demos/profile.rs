//! A minimal stand-in for the Go source's `prof/main.go`: hooks `Set`'s
//! enter/leave callbacks to print a call trace instead of reaching for a
//! profiler-specific dependency (nothing in the example pack grounds a
//! `pprof`-style crate for this kind of engine).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pakrat::{Input, Operand, Set};

fn main() {
    let set = Set::new();
    set.add("a", set.regex("[a-z]+"));
    set.add(
        "expr",
        set.ord_choice([
            Into::<Operand>::into(set.concat([
                "expr".into(),
                set.regex(r"[+\-*/]").into(),
                "a".into(),
            ])),
            "a".into(),
        ]),
    );

    let depth = Arc::new(AtomicUsize::new(0));
    let enter_depth = Arc::clone(&depth);
    set.set_enter(move |name, _input, start| {
        println!("{}=> {name} @ {start}", "  ".repeat(enter_depth.load(Ordering::SeqCst)));
        enter_depth.fetch_add(1, Ordering::SeqCst);
    });
    set.set_leave(move |name, _input, start, ok, length| {
        let current = depth.fetch_sub(1, Ordering::SeqCst) - 1;
        println!("{}<- {name} @ {start}: {ok} ({length})", "  ".repeat(current));
    });

    let mut input = Input::new(b"foo+bar-baz*qux/quux".to_vec());
    let (ok, length, _) = set.call("expr", &mut input, 0);
    println!("final: {ok} {length}");
}
