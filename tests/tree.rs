use pakrat::{Input, Node, Operand, Set};

/// The calculator grammar from spec §8 scenario 2, built with named nodes so
/// the resulting tree shape can be asserted against (spec §8 scenario 5,
/// `tree_test.go`'s `TestParseTree` in the source this crate generalizes).
fn calculator_with_names() -> Set {
    let set = Set::new();
    set.add(
        "expr",
        set.ord_choice([
            Into::<Operand>::into(set.named_concat(
                "plus-expr",
                ["expr".into(), set.named_rune("plus-op", '+').into(), "term".into()],
            )),
            set.named_concat(
                "minus-expr",
                ["expr".into(), set.named_rune("minus-op", '-').into(), "term".into()],
            )
            .into(),
            "term".into(),
        ]),
    );
    set.add(
        "term",
        set.ord_choice([
            Into::<Operand>::into(set.named_concat(
                "mul-expr",
                ["term".into(), set.named_rune("mul-op", '*').into(), "factor".into()],
            )),
            set.named_concat(
                "div-expr",
                ["term".into(), set.named_rune("div-op", '/').into(), "factor".into()],
            )
            .into(),
            "factor".into(),
        ]),
    );
    set.add(
        "factor",
        set.ord_choice([
            Into::<Operand>::into(set.named_regex("digit", "[0-9]+")),
            set.named_concat(
                "quoted",
                [
                    set.named_rune("left-quote", '(').into(),
                    "expr".into(),
                    set.named_rune("right-quote", ')').into(),
                ],
            )
            .into(),
        ]),
    );
    set
}

/// A leaf child slot: a present node with no children of its own.
fn leaf(name: &str, start: usize, len: usize) -> Option<Node> {
    Some(Node::new(name, start, len, vec![]))
}

#[test]
fn single_digit_tree() {
    let set = calculator_with_names();
    let mut input = Input::new(b"1".to_vec());
    let (ok, len, node) = set.call("expr", &mut input, 0);
    assert!(ok);
    assert_eq!(len, 1);

    let expected = Node::new(
        "expr",
        0,
        1,
        vec![Some(Node::new(
            "term",
            0,
            1,
            vec![Some(Node::new("factor", 0, 1, vec![leaf("digit", 0, 1)]))],
        ))],
    );
    assert!(node.unwrap().equal(&expected));
}

#[test]
fn plus_expr_tree() {
    let set = calculator_with_names();
    let mut input = Input::new(b"1+2".to_vec());
    let (ok, len, node) = set.call("expr", &mut input, 0);
    assert!(ok);
    assert_eq!(len, 3);

    let digit_1 = Node::new("term", 0, 1, vec![Some(Node::new("factor", 0, 1, vec![leaf("digit", 0, 1)]))]);
    let digit_2 = Node::new("term", 2, 1, vec![Some(Node::new("factor", 2, 1, vec![leaf("digit", 2, 1)]))]);
    let expected = Node::new(
        "expr",
        0,
        3,
        vec![Some(Node::new(
            "plus-expr",
            0,
            3,
            vec![Some(Node::new("expr", 0, 1, vec![Some(digit_1)])), leaf("plus-op", 1, 1), Some(digit_2)],
        ))],
    );
    assert!(node.unwrap().equal(&expected));
}

#[test]
fn quoted_expr_tree() {
    let set = calculator_with_names();
    let mut input = Input::new(b"(1)".to_vec());
    let (ok, len, node) = set.call("expr", &mut input, 0);
    assert!(ok);
    assert_eq!(len, 3);

    let inner_digit = Node::new("term", 1, 1, vec![Some(Node::new("factor", 1, 1, vec![leaf("digit", 1, 1)]))]);
    let expected = Node::new(
        "expr",
        0,
        3,
        vec![Some(Node::new(
            "term",
            0,
            3,
            vec![Some(Node::new(
                "factor",
                0,
                3,
                vec![Some(Node::new(
                    "quoted",
                    0,
                    3,
                    vec![
                        leaf("left-quote", 0, 1),
                        Some(Node::new("expr", 1, 1, vec![Some(inner_digit)])),
                        leaf("right-quote", 2, 1),
                    ],
                ))],
            ))],
        ))],
    );
    assert!(node.unwrap().equal(&expected));
}

#[test]
fn dump_is_bit_exact() {
    let input = Input::new(b"foo".to_vec());
    let node = Node::new(
        "name",
        0,
        3,
        vec![leaf("sub1", 0, 1), leaf("sub2", 1, 1), leaf("sub3", 2, 1)],
    );

    let mut buf = Vec::new();
    node.dump(&mut buf, &input).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\"foo\" name 0-3\n  \"f\" sub1 0-1\n  \"o\" sub2 1-2\n  \"o\" sub3 2-3\n",
    );
}

#[test]
fn equal_detects_every_field() {
    let node = Node::new(
        "name",
        0,
        3,
        vec![leaf("sub1", 0, 1), leaf("sub2", 1, 1), leaf("sub3", 2, 1)],
    );

    assert!(!node.equal(&Node::new("foo", 0, 3, vec![])));
    assert!(!node.equal(&Node::new("name", 1, 3, vec![])));
    assert!(!node.equal(&Node::new("name", 0, 2, vec![])));
    assert!(!node.equal(&Node::new("name", 0, 3, vec![leaf("sub1", 2, 1)])));
    assert!(!node.equal(&Node::new(
        "name",
        0,
        3,
        vec![leaf("sub1", 0, 1), leaf("sub2", 1, 1), leaf("sub8", 2, 1)],
    )));
    assert!(node.equal(&Node::new(
        "name",
        0,
        3,
        vec![leaf("sub1", 0, 1), leaf("sub2", 1, 1), leaf("sub3", 2, 1)],
    )));
}

/// An absent child slot (a zero-width `Predicate` branch) is unequal to any
/// present one, even when the surrounding node is otherwise identical.
#[test]
fn absent_child_is_unequal_to_present_child() {
    let with_child = Node::new("foo", 0, 1, vec![leaf("bar", 0, 1)]);
    let without_child = Node::new("foo", 0, 1, vec![None]);
    assert!(!with_child.equal(&without_child));
    assert!(without_child.equal(&Node::new("foo", 0, 1, vec![None])));
}

#[test]
fn byte_in_byte_range_and_ord_choice_tree_shape() {
    let set = Set::new();
    set.add(
        "foo",
        set.ord_choice([
            Into::<Operand>::into(set.named_byte_in("digit", *b"1234567890")),
            set.named_byte_range("alpha", b'a', b'z').into(),
            set.named_ord_choice(
                "punct",
                [set.named_rune("!", '!').into(), set.named_rune("@", '@').into()],
            )
            .into(),
            set.named_one_or_more("dashes", set.named_rune("dash", '-')).into(),
        ]),
    );

    let check = |text: &'static str, expected: Node| {
        let mut input = Input::new(text.as_bytes().to_vec());
        let (ok, len, node) = set.call("foo", &mut input, 0);
        assert!(ok);
        assert_eq!(len, text.len());
        assert!(node.unwrap().equal(&expected));
    };

    check("1", Node::new("foo", 0, 1, vec![leaf("digit", 0, 1)]));
    check("z", Node::new("foo", 0, 1, vec![leaf("alpha", 0, 1)]));
    check(
        "!",
        Node::new("foo", 0, 1, vec![Some(Node::new("punct", 0, 1, vec![leaf("!", 0, 1)]))]),
    );
    check(
        "-",
        Node::new(
            "foo",
            0,
            1,
            vec![Some(Node::new("dashes", 0, 1, vec![leaf("dash", 0, 1)]))],
        ),
    );
    check(
        "--",
        Node::new(
            "foo",
            0,
            2,
            vec![Some(Node::new("dashes", 0, 2, vec![leaf("dash", 0, 1), leaf("dash", 1, 1)]))],
        ),
    );
}

/// `OrdChoice` over a `Predicate` branch that wins leaves its single child
/// slot present-but-absent (`vec![None]`), not zero children — the winning
/// branch produced no node, but it still occupies the slot.
#[test]
fn ord_choice_over_predicate_keeps_an_absent_slot() {
    let set = Set::new();
    set.add("a", set.rune('a'));
    set.add("foo", set.ord_choice([set.predicate("a").into()]));

    let mut input = Input::new(b"a".to_vec());
    let (ok, len, node) = set.call("foo", &mut input, 0);
    assert!(ok);
    assert_eq!(len, 0);
    let node = node.unwrap();
    assert_eq!(node.subs.len(), 1);
    assert!(node.subs[0].is_none());
}
