// Copyright (C) Brian G. Milnes 2025

//! Parse a Go file and display the tree the rules see

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gofmtc-parse")]
#[command(about = "Parse and display the lowered syntax tree of a Go file", long_about = None)]
struct Args {
    /// Path to the Go file to parse
    path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    print!("{}", gofmtc::parse(&args.path)?);
    Ok(())
}
