// Copyright (C) Brian G. Milnes 2025

//! Tests for the literal locator and literal edits

use gofmtc::literal::literal::{chain_segments, start_literal, Case};
use gofmtc::{BasicLit, BinaryExpr, Ident, LitKind, Node, Span};

fn span() -> Span {
    Span { start: 0, end: 0, line: 1, column: 1 }
}

fn lit(kind: LitKind, value: &str) -> BasicLit {
    BasicLit { kind, value: value.to_string(), span: span() }
}

fn string(value: &str) -> Node {
    Node::BasicLit(lit(LitKind::String, value))
}

fn ident(name: &str) -> Node {
    Node::Ident(Ident { name: name.to_string(), span: span() })
}

fn binary(x: Node, op: &str, y: Node) -> Node {
    Node::Binary(BinaryExpr { x: Box::new(x), op: op.to_string(), y: Box::new(y), span: span() })
}

fn value_of(segment: &Option<&mut BasicLit>) -> Option<String> {
    segment.as_ref().map(|lit| lit.value.clone())
}

#[test]
fn test_start_literal_plain_string() {
    let mut node = string(r#""hello""#);
    let found = start_literal(&mut node).map(|l| l.value.clone());
    assert_eq!(found.as_deref(), Some(r#""hello""#));
}

#[test]
fn test_start_literal_walks_left_branch() {
    let mut node = binary(binary(string(r#""a""#), "+", string(r#""b""#)), "+", string(r#""c""#));
    let found = start_literal(&mut node).map(|l| l.value.clone());
    assert_eq!(found.as_deref(), Some(r#""a""#));
}

#[test]
fn test_start_literal_rejects_other_shapes() {
    let mut node = ident("msg");
    assert!(start_literal(&mut node).is_none());

    let mut node = binary(ident("prefix"), "+", string(r#""tail""#));
    assert!(start_literal(&mut node).is_none());

    let mut node = binary(string(r#""a""#), "-", string(r#""b""#));
    assert!(start_literal(&mut node).is_none());

    let mut node = Node::BasicLit(lit(LitKind::Int, "42"));
    assert!(start_literal(&mut node).is_none());
}

#[test]
fn test_chain_segments_in_source_order() {
    let mut node = binary(
        binary(binary(string(r#""a""#), "+", ident("name")), "+", string(r#""b""#)),
        "+",
        string(r#""c""#),
    );
    let segments = chain_segments(&mut node);
    let values: Vec<Option<String>> = segments.iter().map(value_of).collect();

    assert_eq!(
        values,
        vec![
            Some(r#""a""#.to_string()),
            None,
            Some(r#""b""#.to_string()),
            Some(r#""c""#.to_string()),
        ]
    );
}

#[test]
fn test_chain_segments_long_chain() {
    let mut node = string(r#""first""#);
    for _ in 0..1_000 {
        node = binary(node, "+", ident("x"));
    }
    node = binary(node, "+", string(r#""last""#));

    let segments = chain_segments(&mut node);
    assert_eq!(segments.len(), 1_002);
    assert_eq!(value_of(&segments[0]), Some(r#""first""#.to_string()));
    assert!(segments[1..1_001].iter().all(Option::is_none));
    assert_eq!(value_of(&segments[1_001]), Some(r#""last""#.to_string()));
    drop(segments);

    assert_eq!(start_literal(&mut node).map(|lit| lit.value.clone()), Some(r#""first""#.to_string()));
}

#[test]
fn test_chain_segments_single_node() {
    let mut node = string(r#""only""#);
    assert_eq!(chain_segments(&mut node).len(), 1);

    let mut node = ident("x");
    let segments = chain_segments(&mut node);
    assert_eq!(segments.len(), 1);
    assert!(segments[0].is_none());
}

#[test]
fn test_content_requires_delimiters() {
    assert_eq!(lit(LitKind::String, r#""abc""#).content(), Some("abc"));
    assert_eq!(lit(LitKind::String, "`abc`").content(), Some("abc"));
    assert_eq!(lit(LitKind::String, r#""""#).content(), None);
    assert_eq!(lit(LitKind::String, "``").content(), None);
    assert_eq!(lit(LitKind::String, "abc").content(), None);
}

#[test]
fn test_recase_first() {
    let mut l = lit(LitKind::String, r#""hello world""#);
    assert!(l.recase_first(Case::Upper));
    assert_eq!(l.value, r#""Hello world""#);

    assert!(!l.recase_first(Case::Upper));
    assert_eq!(l.value, r#""Hello world""#);

    assert!(l.recase_first(Case::Lower));
    assert_eq!(l.value, r#""hello world""#);

    let mut digits = lit(LitKind::String, r#""42 things""#);
    assert!(!digits.recase_first(Case::Upper));
    assert_eq!(digits.value, r#""42 things""#);

    let mut raw = lit(LitKind::String, "`Raw`");
    assert!(raw.recase_first(Case::Lower));
    assert_eq!(raw.value, "`raw`");
}

#[test]
fn test_replace_and_prefix_content() {
    let mut l = lit(LitKind::String, r#""a:%w b:%w""#);
    assert!(l.replace_in_content(":%w", ": %w"));
    assert_eq!(l.value, r#""a: %w b: %w""#);
    assert!(!l.replace_in_content(":%w", ": %w"));

    let mut tail = lit(LitKind::String, r#""%w""#);
    assert!(tail.prefix_content(" "));
    assert_eq!(tail.value, r#"" %w""#);

    let mut empty = lit(LitKind::String, r#""""#);
    assert!(!empty.prefix_content(" "));
    assert_eq!(empty.value, r#""""#);
}
