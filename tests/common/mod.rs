// Copyright (C) Brian G. Milnes 2025

//! Common test utilities for integration tests

#![allow(dead_code)]

use anyhow::Result;
use gofmtc::{fix_with, parse_source, Rule};
use std::path::PathBuf;

/// Wrap a statement in a minimal Go program
pub fn wrap_code(code: &str) -> String {
    format!("package main\n\nfunc main() {{\n\t{code}\n}}\n")
}

/// Parse `code`, apply only `rule`, and print it back
pub fn apply_rule(code: &str, rule: Rule) -> Result<String> {
    let file = parse_source(code)?;
    Ok(fix_with(&file, &[rule]).source)
}

/// Parse `code`, apply every rule, and print it back
pub fn apply_all(code: &str) -> Result<String> {
    let file = parse_source(code)?;
    Ok(fix_with(&file, &Rule::ALL).source)
}

/// Path of a file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}
