// Copyright (C) Brian G. Milnes 2025

//! Tool runner infrastructure for gofmtc binaries
//!
//! Provides a consistent wrapper for all gofmtc tools that handles:
//! - Timing measurement
//! - Directory context for Emacs compile-mode
//! - Optional logging to files
//! - Standard error handling

pub mod tool_runner {
    use std::time::Instant;
    use std::path::PathBuf;
    use anyhow::Result;
    use crate::logging::logging::{Console, ToolLogger};

    /// Configuration for a tool run
    pub struct ToolConfig {
        /// Name of the tool (for logging directory)
        pub tool_name: String,
        /// Base directory to display in "Entering directory"
        pub base_dir: PathBuf,
        /// Whether to enable file logging
        pub enable_logging: bool,
        pub console: Console,
    }

    impl ToolConfig {
        /// Create a basic config with just tool name and base directory
        pub fn new(tool_name: &str, base_dir: PathBuf) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                base_dir,
                enable_logging: false,
                console: Console::Stdout,
            }
        }

        pub fn with_logging(mut self, enable_logging: bool) -> Self {
            self.enable_logging = enable_logging;
            self
        }

        pub fn with_console(mut self, console: Console) -> Self {
            self.console = console;
            self
        }
    }

    /// What a tool body hands back to the runner
    pub struct ToolOutcome {
        pub summary: String,
        pub exit_code: i32,
    }

    impl ToolOutcome {
        pub fn new(summary: impl Into<String>, exit_code: i32) -> Self {
            ToolOutcome {
                summary: summary.into(),
                exit_code,
            }
        }
    }

    /// Run a tool with standard timing, context, and optional logging.
    /// Returns the exit code chosen by the tool body.
    ///
    /// Usage:
    /// ```no_run
    /// use gofmtc::tool_runner::tool_runner::{run_tool, ToolConfig, ToolOutcome};
    /// let config = ToolConfig::new("review", std::path::PathBuf::from("."));
    /// let code = run_tool(config, |logger| {
    ///     logger.log("Starting analysis...");
    ///     Ok(ToolOutcome::new("Summary: 0 files checked", 0))
    /// })?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> Result<i32>
    where
        F: FnOnce(&mut ToolLogger) -> Result<ToolOutcome>,
    {
        let start = Instant::now();

        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.tool_name, config.console)
        } else {
            ToolLogger::new_disabled(config.console)
        };

        // Directory context (for Emacs compile-mode)
        logger.log(&format!("Entering directory '{}'", config.base_dir.display()));
        logger.log("");

        let outcome = tool_fn(&mut logger)?;

        logger.log("");
        logger.log(&outcome.summary);
        logger.log(&format!("Completed in {}ms", start.elapsed().as_millis()));

        if config.enable_logging {
            logger.finalize(&outcome.summary);
        }

        Ok(outcome.exit_code)
    }
}
