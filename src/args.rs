// Copyright (C) Brian G. Milnes 2025

//! Standard command-line arguments and file discovery for the review tool

pub mod args {
    use anyhow::{bail, Result};
    use clap::{Parser, ValueEnum};
    use std::collections::HashSet;
    use std::fs;
    use std::path::{Path, PathBuf};
    use walkdir::{DirEntry, WalkDir};

    /// Directories never searched for Go sources
    const SKIPPED_DIRS: [&str; 2] = ["vendor", "testdata"];

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum OutputFormat {
        Text,
        Json,
    }

    #[derive(Parser, Debug)]
    #[command(name = "gofmtc-review")]
    #[command(about = "Report Go log and error messages that gofmtc would rewrite", long_about = None)]
    pub struct StandardArgs {
        /// Go files or directories to check
        pub paths: Vec<PathBuf>,

        /// Directory to search recursively (repeatable)
        #[arg(short = 'd', long = "dir")]
        pub dirs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Write a run log under logs/
        #[arg(long)]
        pub log: bool,
    }

    impl StandardArgs {
        /// Parse process arguments and check that every path exists
        pub fn parse() -> Result<Self> {
            let args = <Self as Parser>::parse();
            args.validate()?;
            Ok(args)
        }

        pub fn validate(&self) -> Result<()> {
            for path in self.paths.iter().chain(self.dirs.iter()) {
                if !path.exists() {
                    bail!("Path not found: {}", path.display());
                }
            }
            Ok(())
        }

        /// Every path to search; the current directory when none were given
        pub fn search_paths(&self) -> Vec<PathBuf> {
            let mut all: Vec<PathBuf> = self.dirs.iter().chain(self.paths.iter()).cloned().collect();
            if all.is_empty() {
                all.push(PathBuf::from("."));
            }
            all
        }

        /// Directories among the search paths (for the "Entering directory" line)
        pub fn get_search_dirs(&self) -> Vec<PathBuf> {
            get_search_dirs(&self.search_paths())
        }
    }

    pub fn get_search_dirs(paths: &[PathBuf]) -> Vec<PathBuf> {
        paths.iter().filter(|p| p.is_dir()).cloned().collect()
    }

    /// Format a number with thousands separators (1234 -> "1,234")
    pub fn format_number(n: usize) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    pub fn is_go_file(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "go")
    }

    fn is_skipped_dir(entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        name.starts_with('.') || SKIPPED_DIRS.iter().any(|dir| name == *dir)
    }

    /// Expand files and directories into a sorted, de-duplicated list of .go files
    pub fn find_go_files(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_file() {
                if is_go_file(path) {
                    files.push(path.clone());
                }
                continue;
            }

            for entry in WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_entry(|e| !is_skipped_dir(e))
                .filter_map(|e| e.ok())
            {
                if entry.file_type().is_file() && is_go_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        }

        // One entry per file however it was spelled (`a/../x.go`, symlinks)
        files.sort();
        let mut seen = HashSet::new();
        files.retain(|file| seen.insert(fs::canonicalize(file).unwrap_or_else(|_| file.clone())));
        files
    }
}
