//! Arithmetic expression grammar from spec §8 scenario 2, ported from
//! Parsley's own `src/main.rs` demo and the `TestCalc`/`TestParseTree`
//! grammars in the Go source this crate generalizes.
//!
//! ```text
//! expr   <- expr ('+' | '-') term | term
//! term   <- term ('*' | '/') factor | factor
//! factor <- [0-9]+ | '(' expr ')'
//! ```

use pakrat::{Input, Operand, Set};

fn build() -> Set {
    let set = Set::new();
    set.add(
        "expr",
        set.ord_choice([
            Into::<Operand>::into(set.concat(["expr".into(), set.rune('+').into(), "term".into()])),
            set.concat(["expr".into(), set.rune('-').into(), "term".into()]).into(),
            "term".into(),
        ]),
    );
    set.add(
        "term",
        set.ord_choice([
            Into::<Operand>::into(set.concat(["term".into(), set.rune('*').into(), "factor".into()])),
            set.concat(["term".into(), set.rune('/').into(), "factor".into()]).into(),
            "factor".into(),
        ]),
    );
    set.add(
        "factor",
        set.ord_choice([
            Into::<Operand>::into(set.regex(r"[0-9]+")),
            set.concat([set.rune('(').into(), "expr".into(), set.rune(')').into()]).into(),
        ]),
    );
    set
}

fn main() {
    env_logger::init();

    println!(
        "{}",
        indoc::indoc! {"
            expr   <- expr ('+' | '-') term | term
            term   <- term ('*' | '/') factor | factor
            factor <- [0-9]+ | '(' expr ')'
        "}
    );

    let set = build();
    let text = "(1)/1*(3-2)+42";
    let mut input = Input::new(text.as_bytes().to_vec());
    let (ok, len, node) = set.call("expr", &mut input, 0);

    println!("matched {ok} for {len} of {} bytes", text.len());
    if let Some(node) = node {
        let mut out = Vec::new();
        node.dump(&mut out, &input).expect("dump to an in-memory buffer");
        print!("{}", String::from_utf8_lossy(&out));
    }
}
