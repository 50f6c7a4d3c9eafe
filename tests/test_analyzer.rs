// Copyright (C) Brian G. Milnes 2025

//! Tests for analyzer module

use gofmtc::{analyze, parse_path, parse_source, print, review_file, Rule};

mod common;
use common::{fixture, wrap_code};

#[test]
fn test_analyze_empty_file() {
    let file = parse_source("").unwrap();
    assert!(analyze(&file).is_empty());
}

#[test]
fn test_analyze_attributes_rules() {
    let source = wrap_code(
        r#"log.Info().Msg("started")
	_ = fmt.Errorf("Failed:%w", errors.New("Root cause"))"#,
    );
    let file = parse_source(&source).unwrap();

    let issues = analyze(&file);
    let rules: Vec<Rule> = issues.iter().map(|i| i.rule).collect();

    assert_eq!(rules, vec![Rule::LogMessage, Rule::WrappedError, Rule::PlainError]);
    assert_eq!(issues[1].before, r#""Failed:%w""#);
    assert_eq!(issues[1].after, r#""failed: %w""#);
    assert_eq!(issues[2].after, r#""root cause""#);
}

#[test]
fn test_analyze_leaves_tree_untouched() {
    let source = wrap_code(r#"_ = errors.New("Boom")"#);
    let file = parse_source(&source).unwrap();

    assert_eq!(analyze(&file).len(), 1);
    assert_eq!(print(&file), source);
}

#[test]
fn test_analyze_sample_fixture() {
    let file = parse_path(&fixture("sample.go")).unwrap();
    let issues = analyze(&file);

    assert_eq!(issues.len(), 7);
    assert!(issues.windows(2).all(|w| (w[0].line, w[0].column) <= (w[1].line, w[1].column)));
    assert_eq!(issues.iter().filter(|i| i.rule == Rule::PlainError).count(), 2);
    assert_eq!(issues.iter().filter(|i| i.rule == Rule::LogMessage).count(), 2);
    assert_eq!(issues.iter().filter(|i| i.rule == Rule::WrappedError).count(), 3);
}

#[test]
fn test_issue_display_and_json() {
    let review = review_file(&fixture("project/main.go")).unwrap();
    assert_eq!(review.issues.len(), 1);

    let issue = &review.issues[0];
    assert_eq!(issue.to_string(), r#"6:17: [plain-error] "Boom" -> "boom""#);

    let json = serde_json::to_value(issue).unwrap();
    assert_eq!(json["rule"], "plain-error");
    assert_eq!(json["after"], r#""boom""#);
}

#[test]
fn test_review_clean_fixture() {
    let review = review_file(&fixture("clean.go")).unwrap();
    assert!(review.issues.is_empty());
}
