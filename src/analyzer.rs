// Copyright (C) Brian G. Milnes 2025

//! Analyzer module for identifying message style issues in Go code

pub mod analyzer {
    use serde::Serialize;

    use crate::ast::ast::SourceFile;
    use crate::printer::printer::changes;
    use crate::rules::rules::Rule;
    use crate::visitor::visitor::rewrite;

    /// A literal that a rule would rewrite
    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct Issue {
        pub rule: Rule,
        pub line: usize,
        pub column: usize,
        pub before: String,
        pub after: String,
    }

    impl std::fmt::Display for Issue {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "{}:{}: [{}] {} -> {}",
                self.line, self.column, self.rule, self.before, self.after
            )
        }
    }

    /// Report what a fix would change, without touching `file`.
    ///
    /// Each rule runs on its own copy of the tree so its edits can be
    /// attributed to it; a literal is the first argument of one call and
    /// the rules' call shapes are disjoint.
    pub fn analyze(file: &SourceFile) -> Vec<Issue> {
        let mut issues = Vec::new();

        for rule in Rule::ALL {
            let mut scratch = file.clone();
            if rewrite(&mut scratch, &[rule]).total_rewrites() == 0 {
                continue;
            }
            issues.extend(changes(&scratch).into_iter().map(|change| Issue {
                rule,
                line: change.line,
                column: change.column,
                before: change.before,
                after: change.after,
            }));
        }

        issues.sort_by_key(|issue| (issue.line, issue.column));
        issues
    }
}
