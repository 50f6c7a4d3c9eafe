// Copyright (C) Brian G. Milnes 2025

//! Logging infrastructure for gofmtc tools
//!
//! Provides consistent logging to files organized by tool and date:
//! - logs/<tool-name>/<date>/run-<timestamp>.log
//!
//! Each tool gets its own directory, with subdirectories by date.
//! Multiple runs on the same day create timestamped log files.

pub mod logging {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use chrono::{Local, DateTime};
    use anyhow::Result;

    /// Where console echo of log lines goes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Console {
        Stdout,
        /// For tools whose stdout carries rewritten source
        Stderr,
    }

    /// Logger for a gofmtc tool
    pub struct ToolLogger {
        log_file: Option<fs::File>,
        log_path: Option<PathBuf>,
        console: Console,
        start_time: DateTime<Local>,
    }

    impl ToolLogger {
        /// Create a logger that only echoes to the console
        pub fn new_disabled(console: Console) -> Self {
            ToolLogger {
                log_file: None,
                log_path: None,
                console,
                start_time: Local::now(),
            }
        }

        /// Create a new logger for a tool
        ///
        /// Creates log directory structure: logs/<tool-name>/<YYYY-MM-DD>/run-<HH-MM-SS>.log
        /// If log creation fails, continues without logging (degrades gracefully)
        pub fn new(tool_name: &str, console: Console) -> Self {
            Self::new_in(Path::new("logs"), tool_name, console)
        }

        /// Same as `new`, rooted at `log_root` instead of `logs/`
        pub fn new_in(log_root: &Path, tool_name: &str, console: Console) -> Self {
            let start_time = Local::now();

            let (log_file, log_path) = match Self::create_log_file(log_root, tool_name, &start_time) {
                Ok((file, path)) => (Some(file), Some(path)),
                Err(e) => {
                    eprintln!("Warning: Could not create log file: {e}");
                    eprintln!("Continuing without logging...");
                    (None, None)
                }
            };

            ToolLogger {
                log_file,
                log_path,
                console,
                start_time,
            }
        }

        fn create_log_file(log_root: &Path, tool_name: &str, start_time: &DateTime<Local>) -> Result<(fs::File, PathBuf)> {
            let date_str = start_time.format("%Y-%m-%d").to_string();
            let time_str = start_time.format("%H-%M-%S").to_string();

            let log_dir = log_root
                .join(tool_name)
                .join(&date_str);

            fs::create_dir_all(&log_dir)?;

            let log_path = log_dir.join(format!("run-{time_str}.log"));
            let log_file = fs::File::create(&log_path)?;

            Ok((log_file, log_path))
        }

        /// Log a message to the console and the log file
        pub fn log(&mut self, message: &str) {
            match self.console {
                Console::Stdout => println!("{message}"),
                Console::Stderr => eprintln!("{message}"),
            }
            self.log_silent(message);
        }

        /// Log file only
        pub fn log_silent(&mut self, message: &str) {
            if let Some(ref mut file) = self.log_file {
                let _ = writeln!(file, "{message}");
            }
        }

        /// Get the path to the log file (if logging is enabled)
        pub fn log_path(&self) -> Option<&Path> {
            self.log_path.as_deref()
        }

        /// Finalize the log with summary information
        pub fn finalize(&mut self, summary: &str) {
            let end_time = Local::now();
            let duration = end_time.signed_duration_since(self.start_time);

            self.log_silent("");
            self.log_silent("=== Run Summary ===");
            self.log_silent(summary);
            self.log_silent(&format!("Started: {}", self.start_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Ended: {}", end_time.format("%Y-%m-%d %H:%M:%S")));
            self.log_silent(&format!("Duration: {}ms", duration.num_milliseconds()));

            if let Some(path) = self.log_path.clone() {
                self.log(&format!("Log saved to: {}", path.display()));
            }
        }
    }

    impl Drop for ToolLogger {
        fn drop(&mut self) {
            if let Some(ref mut file) = self.log_file {
                let _ = file.flush();
            }
        }
    }
}
