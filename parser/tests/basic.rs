use yamlet_parser::{
    parse_from_lines, parse_from_text, ErrorKind, Marker, Node, ParseError, StrInput, MAX_DEPTH,
    MAX_KEY_LENGTH,
};

/// Run the parser through the string.
///
/// The parser is run through both the whole string and the lines of the string. The results are
/// then compared and must match.
///
/// # Panics
/// This function panics if there is a mismatch between the 2 parser invocations.
fn run_parser(input: &str) -> Result<Node, ParseError> {
    let from_text = parse_from_text(input);
    let from_lines = parse_from_lines(StrInput::new(input));
    match (&from_text, &from_lines) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        _ => panic!("text and lines disagree: {from_text:?} vs {from_lines:?}"),
    }
    from_text
}

fn seq<const N: usize>(items: [Node; N]) -> Node {
    Node::Sequence(items.into())
}

fn map<const N: usize>(entries: [(&str, Node); N]) -> Node {
    entries.into_iter().collect()
}

fn s(text: &str) -> Node {
    Node::from(text)
}

#[test]
fn test_flat_mapping() {
    assert_eq!(
        run_parser("one: foo\ntwo: bar\nage: 33").unwrap(),
        map([("one", s("foo")), ("two", s("bar")), ("age", s("33"))])
    );
}

#[test]
fn test_sequence() {
    assert_eq!(
        run_parser("- a\n- b\n- c").unwrap(),
        seq([s("a"), s("b"), s("c")])
    );
}

#[test]
fn test_nested_sequence() {
    assert_eq!(
        run_parser("- a\n-\n  - x\n  - y\n- b").unwrap(),
        seq([s("a"), seq([s("x"), s("y")]), s("b")])
    );
}

#[test]
fn test_list_in_list() {
    assert_eq!(
        run_parser("- - a\n  - b\n- - c").unwrap(),
        seq([seq([s("a"), s("b")]), seq([s("c")])])
    );
}

#[test]
fn test_mapping_in_list() {
    assert_eq!(
        run_parser("- a: 1\n  b: 2\n- c: 3").unwrap(),
        seq([map([("a", s("1")), ("b", s("2"))]), map([("c", s("3"))])])
    );
}

#[test]
fn test_nested_mapping() {
    let input = "name: Max Mustermann\naddress:\n  street: Main St\n  city: Springfield\nage: 33";
    assert_eq!(
        run_parser(input).unwrap(),
        map([
            ("name", s("Max Mustermann")),
            (
                "address",
                map([("street", s("Main St")), ("city", s("Springfield"))])
            ),
            ("age", s("33")),
        ])
    );
}

#[test]
fn test_list_in_mapping() {
    let expected = map([("a", seq([s("x"), s("y")])), ("b", s("c"))]);
    assert_eq!(run_parser("a:\n  - x\n  - y\nb: c").unwrap(), expected);
    // A sequence may sit at the indentation of its key.
    assert_eq!(run_parser("a:\n- x\n- y\nb: c").unwrap(), expected);
}

#[test]
fn test_dedent_ends_blocks() {
    assert_eq!(
        run_parser("a:\n  b:\n    c: 1\n  d: 2\ne: 3").unwrap(),
        map([
            ("a", map([("b", map([("c", s("1"))])), ("d", s("2"))])),
            ("e", s("3")),
        ])
    );
}

#[test]
fn test_value_on_next_line() {
    assert_eq!(run_parser("a:\n  b").unwrap(), map([("a", s("b"))]));
    assert_eq!(run_parser("-\n  b").unwrap(), seq([s("b")]));
}

#[test]
fn test_plain_scalars() {
    assert_eq!(
        run_parser("- ::vector\n- Up, up, and away!\n- -123\n- http://example.com/foo#bar").unwrap(),
        seq([
            s("::vector"),
            s("Up, up, and away!"),
            s("-123"),
            s("http://example.com/foo#bar"),
        ])
    );
}

#[test]
fn test_utf() {
    assert_eq!(run_parser("a: 你好").unwrap(), map([("a", s("你好"))]));
}

#[test]
fn test_top_level_scalar() {
    assert_eq!(run_parser("hello world").unwrap(), s("hello world"));
}

#[test]
fn test_empty_nodes() {
    assert_eq!(run_parser("").unwrap(), Node::empty());
    assert_eq!(run_parser("\n\n").unwrap(), Node::empty());
    assert_eq!(run_parser("---").unwrap(), Node::empty());
    assert_eq!(
        run_parser("a:\nb: c\nd:").unwrap(),
        map([("a", Node::empty()), ("b", s("c")), ("d", Node::empty())])
    );
    assert_eq!(
        run_parser("-\n- b\n-").unwrap(),
        seq([Node::empty(), s("b"), Node::empty()])
    );
}

#[test]
fn test_explicit_document() {
    let bare = run_parser("a: 1\nb: 2").unwrap();
    assert_eq!(run_parser("---\na: 1\nb: 2").unwrap(), bare);
    assert_eq!(run_parser("--- !<http://foo.bar>\na: 1\nb: 2").unwrap(), bare);
    assert_eq!(run_parser("--- foo").unwrap(), s("foo"));
}

#[test]
fn test_tags_are_ignored() {
    assert_eq!(
        run_parser("a: !!str 1\nb: !foo\n  - x").unwrap(),
        map([("a", s("1")), ("b", seq([s("x")]))])
    );
}

#[test]
fn test_only_first_document() {
    assert_eq!(
        run_parser("a: b\n---\nc: d").unwrap(),
        map([("a", s("b"))])
    );
    assert_eq!(
        run_parser("a: b\n...\nanything: [at all").unwrap(),
        map([("a", s("b"))])
    );
}

#[test]
fn test_comments() {
    let input = "
# This is a comment
a: b # This is another comment
##
  #

c:
  # inside
  - d # again
";
    assert_eq!(
        run_parser(input).unwrap(),
        map([("a", s("b")), ("c", seq([s("d")]))])
    );
}

#[test]
fn test_line_endings() {
    let expected = map([("a", s("1")), ("b", seq([s("2")]))]);
    assert_eq!(run_parser("a: 1\r\nb:\r\n  - 2\r\n").unwrap(), expected);
    assert_eq!(run_parser("a: 1\rb:\r  - 2\r").unwrap(), expected);
}

#[test]
fn test_lines_without_terminators() {
    assert_eq!(
        parse_from_lines(["a: 1", "b:", "  - 2", "  - 3"]).unwrap(),
        map([("a", s("1")), ("b", seq([s("2"), s("3")]))])
    );
}

#[test]
fn test_duplicate_keys() {
    let node = run_parser("a: 1\nb: 2\na: 3").unwrap();
    assert_eq!(node, map([("a", s("3")), ("b", s("2"))]));
    let keys: Vec<_> = node.as_mapping().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn test_anchors() {
    let node = run_parser("a: &foo\n  - x\n  - y\nb: *foo").unwrap();
    assert_eq!(node["a"], seq([s("x"), s("y")]));
    assert_eq!(node["a"], node["b"]);

    assert_eq!(
        run_parser("- &m\n  k: v\n- *m").unwrap(),
        seq([map([("k", s("v"))]), map([("k", s("v"))])])
    );
    assert_eq!(
        run_parser("- &a x\n- &a y\n- *a").unwrap(),
        seq([s("x"), s("y"), s("y")])
    );
}

#[test]
fn test_undefined_alias() {
    let error = run_parser("a: *x").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::UndefinedAlias(name) if name == "x"));
    assert_eq!(
        error.to_string(),
        "undefined alias `x`: parse failed at alias \"*x\" at line 1 column 4, next token is end of input"
    );
    // No forward references.
    assert!(run_parser("a: *x\nb: &x 1").is_err());
}

#[test]
fn test_bad_indentation() {
    let error = run_parser("a: 1\n  b: 2").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::BadIndentation));
    assert_eq!(error.marker(), Some(Marker::new(2, 3)));

    let error = run_parser("- a\n  - b").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::BadIndentation));

    let error = run_parser("a:\n  b: 1\n   c: 2").unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::BadIndentation));
}

#[test]
fn test_fail() {
    // Two entries on one line.
    let error = run_parser("a: b c: d").unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::UnexpectedToken {
            expected: "end of line"
        }
    ));

    // A sequence entry among mapping keys.
    let error = run_parser("a: b\n- c").unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::UnexpectedToken {
            expected: "mapping key"
        }
    ));

    // A second root node.
    let error = run_parser("a\nb").unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::UnexpectedToken {
            expected: "end of document"
        }
    ));
    assert_eq!(error.marker(), Some(Marker::new(2, 1)));

    // Lexical anomalies are reported by the parser.
    let error = run_parser("a: @b").unwrap_err();
    assert_eq!(error.current().map(|t| t.text()), Some("@"));
}

#[test]
fn test_unsupported_constructs() {
    for (input, construct) in [
        ("a: [1, 2]", "flow collections"),
        ("a: {b: c}", "flow collections"),
        ("a: |\n  text", "block scalars"),
        ("a: >-\n  text", "block scalars"),
        ("? a\n: b", "complex mapping keys"),
        ("a: 1\n? b\n: 2", "complex mapping keys"),
    ] {
        let error = run_parser(input).unwrap_err();
        assert!(
            matches!(error.kind(), ErrorKind::Unsupported(c) if *c == construct),
            "{input:?}: {error}"
        );
    }
}

#[test]
fn test_depth_limit() {
    // Default stack size.
    std::thread::spawn(|| {
        let deep = format!("{}a", "- ".repeat(MAX_DEPTH + 10));
        let error = run_parser(&deep).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::DepthLimit(MAX_DEPTH)));

        let fine = format!("{}a", "- ".repeat(MAX_DEPTH));
        let mut node = &run_parser(&fine).unwrap();
        for _ in 0..MAX_DEPTH {
            node = &node[0];
        }
        assert_eq!(node, &s("a"));
    })
    .join()
    .unwrap();
}

/// `k:` nested one level deeper on each line, `depth` mappings in total.
fn nested_keys(depth: usize) -> String {
    let mut out = String::new();
    for i in 0..depth - 1 {
        out.push_str(&"  ".repeat(i));
        out.push_str("k:\n");
    }
    out.push_str(&"  ".repeat(depth - 1));
    out.push_str("k: v\n");
    out
}

#[test]
fn test_depth_limit_nested_mappings() {
    std::thread::spawn(|| {
        let mut node = &run_parser(&nested_keys(MAX_DEPTH)).unwrap();
        for _ in 0..MAX_DEPTH {
            node = &node["k"];
        }
        assert_eq!(node, &s("v"));

        for depth in [MAX_DEPTH + 1, MAX_DEPTH + 10, 4 * MAX_DEPTH] {
            let error = run_parser(&nested_keys(depth)).unwrap_err();
            assert!(
                matches!(error.kind(), ErrorKind::DepthLimit(MAX_DEPTH)),
                "depth {depth}: {error}"
            );
        }
    })
    .join()
    .unwrap();
}

#[test]
fn test_key_length() {
    let long = "k".repeat(MAX_KEY_LENGTH + 1);
    let error = run_parser(&format!("{long}: v")).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::KeyTooLong(MAX_KEY_LENGTH)));

    let ok = "k".repeat(MAX_KEY_LENGTH);
    assert_eq!(run_parser(&format!("{ok}: v")).unwrap()[ok.as_str()], s("v"));
}

#[test]
fn test_display() {
    let node = run_parser("a:\n  - x\n  -\nb: c").unwrap();
    assert_eq!(node.to_string(), "{a: [x, ''], b: c}");
}
