// Copyright (C) Brian G. Milnes 2025

//! Tests for parser module

use gofmtc::{find_calls, parse_source, string_literals, LitKind, Node};

mod common;
use common::wrap_code;

#[test]
fn test_parse_empty_file() {
    let file = parse_source("").unwrap();
    assert!(find_calls(&file.root).is_empty());
}

#[test]
fn test_parse_simple_program() {
    let source = wrap_code(r#"fmt.Println("Hello, world!")"#);

    let file = parse_source(&source).unwrap();
    assert_eq!(file.source, source);
    assert_eq!(find_calls(&file.root).len(), 1);
}

#[test]
fn test_parse_call_shape() {
    let file = parse_source(&wrap_code(r#"fmt.Errorf("a"+"b", err)"#)).unwrap();
    let calls = find_calls(&file.root);
    let call = calls[0];

    let Node::Selector(sel) = call.fun.as_ref() else {
        panic!("expected selector callee, got {:?}", call.fun);
    };
    assert_eq!(sel.sel.name, "Errorf");
    assert!(matches!(sel.x.as_ref(), Node::Ident(id) if id.name == "fmt"));

    assert_eq!(call.args.len(), 2);
    let Node::Binary(bin) = &call.args[0] else {
        panic!("expected binary first argument, got {:?}", call.args[0]);
    };
    assert_eq!(bin.op, "+");
    assert!(matches!(&call.args[1], Node::Ident(id) if id.name == "err"));
}

#[test]
fn test_parse_literal_kinds() {
    let source = wrap_code("f(1, 2.5, 3i, 'x', \"s\", `raw`)");
    let file = parse_source(&source).unwrap();
    let calls = find_calls(&file.root);

    let kinds: Vec<LitKind> = calls[0]
        .args
        .iter()
        .filter_map(|arg| match arg {
            Node::BasicLit(lit) => Some(lit.kind),
            _ => None,
        })
        .collect();
    assert_eq!(
        kinds,
        vec![LitKind::Int, LitKind::Float, LitKind::Imag, LitKind::Char, LitKind::String, LitKind::String]
    );
}

#[test]
fn test_parse_spans_point_at_source() {
    let source = wrap_code(r#"x := "héllo""#);
    let file = parse_source(&source).unwrap();
    let literals = string_literals(&file.root);

    assert_eq!(literals.len(), 1);
    let lit = literals[0];
    assert_eq!(file.text(lit.span), r#""héllo""#);
    assert_eq!(lit.value, r#""héllo""#);
    assert_eq!(lit.span.line, 4);
    assert_eq!(lit.span.column, 7);
}

#[test]
fn test_parse_reaches_nested_calls() {
    let source = r#"package main

var handler = func() error {
	defer cleanup(errors.New("A"))
	go func() { log.Info().Msg("b") }()
	errs := []error{fmt.Errorf("C")}
	return errs[0]
}
"#;
    let file = parse_source(source).unwrap();
    let names: Vec<String> = find_calls(&file.root)
        .iter()
        .filter_map(|call| match call.fun.as_ref() {
            Node::Selector(sel) => Some(sel.sel.name.clone()),
            Node::Ident(id) => Some(id.name.clone()),
            _ => None,
        })
        .collect();

    for expected in ["cleanup", "New", "Msg", "Info", "Errorf"] {
        assert!(names.iter().any(|n| n == expected), "missing {expected} in {names:?}");
    }
}

#[test]
fn test_parse_drops_comments_but_keeps_source() {
    let source = wrap_code(r#"// errors.New("Comment")
	_ = errors.New("Real")"#);
    let file = parse_source(&source).unwrap();

    assert_eq!(string_literals(&file.root).len(), 1);
    assert!(file.source.contains("// errors.New(\"Comment\")"));
}

#[test]
fn test_parse_error_reports_position() {
    let source = "package main\n\nfunc main() {\n\tfmt.Errorf(\"Unclosed\"\n}\n";

    let err = parse_source(source).unwrap_err();
    let message = format!("{err}");
    assert!(message.starts_with("Parse error at "), "unexpected message: {message}");
}

#[test]
fn test_parse_error_on_garbage() {
    assert!(parse_source("package main\n\nfunc {{{\n").is_err());
}
