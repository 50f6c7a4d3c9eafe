// Copyright (C) Brian G. Milnes 2025

//! The three message style rules
//!
//! - log-message: `x.Info()...Msg("hello")` becomes `Msg("Hello")`
//! - wrapped-error: `fmt.Errorf("Failed:%w", err)` becomes `fmt.Errorf("failed: %w", err)`
//! - plain-error: `errors.New("Failed")` becomes `errors.New("failed")`
//!
//! Each rule checks its own call shape and is a no-op on anything else,
//! so the driver can hand every call to every rule.

pub mod rules {
    use serde::Serialize;
    use std::fmt;

    use crate::ast::ast::CallExpr;
    use crate::literal::literal::{chain_segments, start_literal, Case};
    use crate::matching::matching::{is_chained_log_message, is_package_call};

    /// Colon directly followed by the wrap verb
    const TIGHT_WRAP: &str = ":%w";
    /// Colon, one space, wrap verb
    const SPACED_WRAP: &str = ": %w";
    const WRAP_VERB: &str = "%w";

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum Rule {
        LogMessage,
        WrappedError,
        PlainError,
    }

    impl Rule {
        pub const ALL: [Rule; 3] = [Rule::LogMessage, Rule::WrappedError, Rule::PlainError];

        pub fn name(self) -> &'static str {
            match self {
                Rule::LogMessage => "log-message",
                Rule::WrappedError => "wrapped-error",
                Rule::PlainError => "plain-error",
            }
        }

        pub fn description(self) -> &'static str {
            match self {
                Rule::LogMessage => "log messages start with an upper-case letter",
                Rule::WrappedError => "fmt.Errorf messages start lower-case and use \": %w\"",
                Rule::PlainError => "errors.New messages start lower-case",
            }
        }

        /// Apply this rule to one call. Returns true if any literal changed.
        pub fn apply(self, call: &mut CallExpr) -> bool {
            match self {
                Rule::LogMessage => log_message(call),
                Rule::WrappedError => wrapped_error(call),
                Rule::PlainError => plain_error(call),
            }
        }
    }

    impl fmt::Display for Rule {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    /// Capitalize the first letter of a chained logger's `.Msg(...)` message
    pub fn log_message(call: &mut CallExpr) -> bool {
        if !is_chained_log_message(call) {
            return false;
        }
        let Some(arg) = call.args.first_mut() else {
            return false;
        };

        start_literal(arg).is_some_and(|lit| lit.recase_first(Case::Upper))
    }

    /// Lower-case the start of a `fmt.Errorf` message and space its `%w` verb
    pub fn wrapped_error(call: &mut CallExpr) -> bool {
        if !is_package_call(call, "fmt", "Errorf") {
            return false;
        }
        let Some(arg) = call.args.first_mut() else {
            return false;
        };

        let mut segments = chain_segments(arg);
        let mut changed = false;

        if let Some(Some(start)) = segments.first_mut() {
            changed |= start.recase_first(Case::Lower);
        }

        for lit in segments.iter_mut().flatten() {
            changed |= lit.replace_in_content(TIGHT_WRAP, SPACED_WRAP);
        }

        // "...:" + "%w..." gets its space at the start of the right fragment
        for i in 1..segments.len() {
            let (before, after) = segments.split_at_mut(i);
            let (Some(prev), Some(next)) = (&before[i - 1], &mut after[0]) else {
                continue;
            };
            let prev_ends_with_colon = prev.content().is_some_and(|c| c.ends_with(':'));
            let next_starts_with_verb = next.content().is_some_and(|c| c.starts_with(WRAP_VERB));
            if prev_ends_with_colon && next_starts_with_verb {
                changed |= next.prefix_content(" ");
            }
        }

        changed
    }

    /// Lower-case the first letter of an `errors.New` message
    pub fn plain_error(call: &mut CallExpr) -> bool {
        if !is_package_call(call, "errors", "New") {
            return false;
        }
        let Some(arg) = call.args.first_mut() else {
            return false;
        };

        start_literal(arg).is_some_and(|lit| lit.recase_first(Case::Lower))
    }
}
