// Copyright (C) Brian G. Milnes 2025

//! Printer: renders a (possibly rewritten) tree back to Go source
//!
//! Printing is lossless. Every byte outside a rewritten literal comes
//! from the original source, so comments and layout are untouched.
//! Canonical formatting is left to gofmt, which can be run afterwards.

pub mod printer {
    use anyhow::{anyhow, Context, Result};
    use serde::Serialize;
    use std::io::Write;
    use std::process::{Command, Stdio};

    use crate::ast::ast::SourceFile;
    use crate::ast_utils::ast_utils::string_literals;

    /// One literal whose stored value differs from the source text
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct LiteralChange {
        pub line: usize,
        pub column: usize,
        pub before: String,
        pub after: String,
    }

    /// Rewritten literals in source order
    pub fn changes(file: &SourceFile) -> Vec<LiteralChange> {
        string_literals(&file.root)
            .into_iter()
            .filter(|lit| file.text(lit.span) != lit.value)
            .map(|lit| LiteralChange {
                line: lit.span.line,
                column: lit.span.column,
                before: file.text(lit.span).to_string(),
                after: lit.value.clone(),
            })
            .collect()
    }

    /// Render the tree, splicing rewritten literal values into the original text
    pub fn print(file: &SourceFile) -> String {
        let mut out = String::with_capacity(file.source.len());
        let mut cursor = 0;

        for lit in string_literals(&file.root) {
            if file.text(lit.span) == lit.value {
                continue;
            }
            out.push_str(&file.source[cursor..lit.span.start]);
            out.push_str(&lit.value);
            cursor = lit.span.end;
        }
        out.push_str(&file.source[cursor..]);

        out
    }

    /// Pipe source text through `gofmt` and return its output
    pub fn gofmt(source: &str) -> Result<String> {
        let mut child = Command::new("gofmt")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context("Failed to run gofmt (is it on PATH?)")?;

        child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("gofmt stdin unavailable"))?
            .write_all(source.as_bytes())
            .context("Failed to write to gofmt")?;

        let output = child.wait_with_output().context("Failed to wait for gofmt")?;
        if !output.status.success() {
            return Err(anyhow!(
                "gofmt failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}
