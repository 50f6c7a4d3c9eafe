// Copyright (C) Brian G. Milnes 2025

//! Review: report Go log and error messages that gofmtc would rewrite
//!
//! Checks every .go file under the given paths without modifying them.
//! Exit code 1 when any file would change, 0 otherwise.
//!
//! Binary: gofmtc-review

use anyhow::Result;
use gofmtc::logging::logging::Console;
use gofmtc::tool_runner::tool_runner::{run_tool, ToolConfig, ToolOutcome};
use gofmtc::{find_go_files, format_number, review_file, FileReview, OutputFormat, StandardArgs};
use rayon::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = StandardArgs::parse()?;

    let search_paths = args.search_paths();
    let base_dir = args
        .get_search_dirs()
        .into_iter()
        .next()
        .unwrap_or_else(|| PathBuf::from("."));

    // JSON owns stdout, so the run's own lines go to stderr
    let console = match args.format {
        OutputFormat::Text => Console::Stdout,
        OutputFormat::Json => Console::Stderr,
    };
    let config = ToolConfig::new("gofmtc-review", base_dir)
        .with_logging(args.log)
        .with_console(console);

    let code = run_tool(config, |logger| {
        let files = find_go_files(&search_paths);
        let (reviews, failures) = review_all(&files);

        let mut total_issues = 0;
        let mut files_with_issues = 0;
        for review in &reviews {
            if review.issues.is_empty() {
                continue;
            }
            files_with_issues += 1;
            total_issues += review.issues.len();
            for issue in &review.issues {
                let line = format!("{}:{issue}", review.path.display());
                match args.format {
                    OutputFormat::Text => logger.log(&line),
                    OutputFormat::Json => logger.log_silent(&line),
                }
            }
        }
        for (path, err) in &failures {
            let line = format!("{}: error: {err:#}", path.display());
            match args.format {
                OutputFormat::Text => logger.log(&line),
                OutputFormat::Json => logger.log_silent(&line),
            }
        }

        if args.format == OutputFormat::Json {
            println!("{}", json_report(files.len(), &reviews, &failures)?);
        }

        let summary = format!(
            "Summary: {} files checked, {} files would change, {} total rewrites, {} parse failures",
            format_number(files.len()),
            format_number(files_with_issues),
            format_number(total_issues),
            format_number(failures.len())
        );
        let exit_code = if total_issues > 0 || !failures.is_empty() { 1 } else { 0 };
        Ok(ToolOutcome::new(summary, exit_code))
    })?;

    std::process::exit(code);
}

/// Review files in parallel. Each file is an independent tree.
fn review_all(files: &[PathBuf]) -> (Vec<FileReview>, Vec<(PathBuf, anyhow::Error)>) {
    let results: Vec<(PathBuf, Result<FileReview>)> = files
        .par_iter()
        .map(|path| (path.clone(), review_file(path)))
        .collect();

    let mut reviews = Vec::new();
    let mut failures = Vec::new();
    for (path, result) in results {
        match result {
            Ok(review) => reviews.push(review),
            Err(err) => failures.push((path, err)),
        }
    }
    (reviews, failures)
}

fn json_report(
    files_checked: usize,
    reviews: &[FileReview],
    failures: &[(PathBuf, anyhow::Error)],
) -> Result<String> {
    let failed: Vec<serde_json::Value> = failures
        .iter()
        .map(|(path, err)| serde_json::json!({ "path": path, "error": format!("{err:#}") }))
        .collect();
    let changed: Vec<&FileReview> = reviews.iter().filter(|r| !r.issues.is_empty()).collect();

    let report = serde_json::json!({
        "files_checked": files_checked,
        "files": changed,
        "failures": failed,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}
