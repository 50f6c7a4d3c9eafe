// Copyright (C) Brian G. Milnes 2025

//! Tests for printer module

use gofmtc::{changes, parse_source, print, rewrite, Rule};

mod common;
use common::wrap_code;

#[test]
fn test_print_unchanged_tree_is_identity() {
    let source = "package main\n\n// comment\nfunc main() {\n\tx := \"Keep\"   // spacing\n}\n";
    let file = parse_source(source).unwrap();

    assert_eq!(print(&file), source);
    assert!(changes(&file).is_empty());
}

#[test]
fn test_print_splices_multiple_literals() {
    let source = wrap_code(r#"_ = fmt.Errorf("A"+"b:"+"%w", errors.New("C"))"#);
    let mut file = parse_source(&source).unwrap();
    rewrite(&mut file, &Rule::ALL);

    assert_eq!(
        print(&file),
        wrap_code(r#"_ = fmt.Errorf("a"+"b:"+" %w", errors.New("c"))"#)
    );
}

#[test]
fn test_changes_lists_rewritten_literals_in_order() {
    let source = wrap_code(
        r#"_ = errors.New("First")
	log.Debug().Msg("second")"#,
    );
    let mut file = parse_source(&source).unwrap();
    rewrite(&mut file, &Rule::ALL);

    let listed = changes(&file);
    assert_eq!(listed.len(), 2);

    assert_eq!(listed[0].line, 4);
    assert_eq!(listed[0].before, r#""First""#);
    assert_eq!(listed[0].after, r#""first""#);

    assert_eq!(listed[1].line, 5);
    assert_eq!(listed[1].before, r#""second""#);
    assert_eq!(listed[1].after, r#""Second""#);
}
