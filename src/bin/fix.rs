// Copyright (C) Brian G. Milnes 2025

//! Rewrite log and error messages in a Go file
//!
//! Prints the rewritten source to stdout, or writes it back with -w.
//! Diagnostics go to stderr.
//!
//! Binary: gofmtc

use anyhow::Result;
use clap::Parser;
use gofmtc::logging::logging::{Console, ToolLogger};
use gofmtc::Rule;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gofmtc")]
#[command(about = "Rewrite Go log and error messages to house style", long_about = None)]
struct Args {
    /// Path to the Go file to rewrite
    path: PathBuf,

    /// Write the result back to the file instead of stdout
    #[arg(short = 'w', long)]
    in_place: bool,

    /// Pipe the result through gofmt
    #[arg(long)]
    gofmt: bool,

    /// Write a run log under logs/
    #[arg(long)]
    log: bool,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    let mut logger = if args.log {
        ToolLogger::new("gofmtc", Console::Stderr)
    } else {
        ToolLogger::new_disabled(Console::Stderr)
    };
    logger.log_silent(&format!("Fixing file: {}", args.path.display()));
    logger.log_silent(&format!("In-place: {}", args.in_place));

    let stats = gofmtc::fix_file(&args.path, args.in_place, args.gofmt)?;

    for rule in Rule::ALL {
        logger.log_silent(&format!("{rule} ({}): {} call(s) rewritten", rule.description(), stats.count(rule)));
    }
    let summary = format!(
        "{} call(s) visited, {} rewritten in {}ms",
        stats.calls_visited,
        stats.total_rewrites(),
        start.elapsed().as_millis()
    );
    if args.in_place {
        logger.log(&format!("{}: {summary}", args.path.display()));
    }
    if args.log {
        logger.finalize(&summary);
    }

    Ok(())
}
