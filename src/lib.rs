// Copyright (C) Brian G. Milnes 2025

//! Gofmtc - AST-based message style fixer for Go
//!
//! Parses Go source, finds logging and error-construction calls
//! (`x.Info()...Msg`, `fmt.Errorf`, `errors.New`), and rewrites the
//! string literals of their first argument to the house style. Everything
//! else in the file is printed back byte for byte.

pub mod ast;
pub mod parser;
pub mod literal;
pub mod matching;
pub mod rules;
pub mod visitor;
pub mod printer;
pub mod analyzer;
pub mod fixer;
pub mod args;
pub mod ast_utils;
pub mod logging;
pub mod tool_runner;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

// Re-export commonly used items
pub use ast::ast::{BasicLit, BinaryExpr, CallExpr, Ident, LitKind, Node, SelectorExpr, SourceFile, Span};
pub use parser::parser::{parse_path, parse_source, GoParser};
pub use rules::rules::Rule;
pub use visitor::visitor::{rewrite, RewriteStats};
pub use printer::printer::{changes, gofmt, print, LiteralChange};
pub use analyzer::analyzer::{analyze, Issue};
pub use fixer::fixer::{fix, fix_with, Fixed};
pub use args::args::{StandardArgs, OutputFormat, format_number, find_go_files, get_search_dirs};
pub use ast_utils::ast_utils::*;

/// Review result for one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReview {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

/// Stack size of the thread that owns a file's tree.
///
/// Lowering and the rule walk recurse once per nesting level, as do the
/// tree's `Clone` and `Drop`. A `+` chain nests one level per fragment.
pub const TREE_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Run `work` on a scoped thread with a `TREE_STACK_SIZE` stack.
///
/// The entry points below keep a tree's whole lifetime inside `work`;
/// only plain results cross back to the caller's thread.
pub fn with_tree_stack<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send,
    T: Send,
{
    std::thread::scope(|scope| {
        let handle = std::thread::Builder::new()
            .name("gofmtc-tree".to_string())
            .stack_size(TREE_STACK_SIZE)
            .spawn_scoped(scope, work)
            .context("Failed to spawn tree worker thread")?;
        handle
            .join()
            .map_err(|_| anyhow!("Tree worker thread panicked"))?
    })
}

/// Rewrite Go source text with every rule
pub fn rewrite_source(source: &str) -> Result<String> {
    with_tree_stack(|| {
        let file = parse_source(source)?;
        Ok(fix(&file).source)
    })
}

/// Rewrite a Go file, optionally normalizing the result with gofmt
pub fn rewrite_file(file: &Path, use_gofmt: bool) -> Result<Fixed> {
    let mut fixed = with_tree_stack(|| {
        let parsed = parse_path(file)?;
        Ok(fix(&parsed))
    })?;

    if use_gofmt {
        fixed.source = gofmt(&fixed.source)
            .with_context(|| format!("Failed to format {}", file.display()))?;
    }

    Ok(fixed)
}

/// Fix a Go file: print the result, or write it back when `in_place`
pub fn fix_file(file: &Path, in_place: bool, use_gofmt: bool) -> Result<RewriteStats> {
    let fixed = rewrite_file(file, use_gofmt)?;

    if in_place {
        std::fs::write(file, &fixed.source)
            .with_context(|| format!("Failed to write {}", file.display()))?;
    } else {
        print!("{}", fixed.source);
    }

    Ok(fixed.stats)
}

/// Report what fixing a Go file would change
pub fn review_file(file: &Path) -> Result<FileReview> {
    let issues = with_tree_stack(|| {
        let parsed = parse_path(file)?;
        Ok(analyze(&parsed))
    })?;

    Ok(FileReview {
        path: file.to_path_buf(),
        issues,
    })
}

/// Parse a Go file and return a dump of its lowered tree
pub fn parse(file: &Path) -> Result<String> {
    with_tree_stack(|| {
        let parsed = parse_path(file)?;
        Ok(dump_tree(&parsed.root))
    })
}
