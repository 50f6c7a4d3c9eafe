// Copyright (C) Brian G. Milnes 2025

//! Fixer module for rewriting message literals in Go code

pub mod fixer {
    use crate::ast::ast::SourceFile;
    use crate::printer::printer::print;
    use crate::rules::rules::Rule;
    use crate::visitor::visitor::{rewrite, RewriteStats};

    /// Result of fixing one file
    #[derive(Debug, Clone)]
    pub struct Fixed {
        pub source: String,
        pub stats: RewriteStats,
    }

    /// Apply every rule to a copy of `file` and return the rewritten source
    pub fn fix(file: &SourceFile) -> Fixed {
        fix_with(file, &Rule::ALL)
    }

    /// Apply only `rules` to a copy of `file`
    pub fn fix_with(file: &SourceFile, rules: &[Rule]) -> Fixed {
        let mut rewritten = file.clone();
        let stats = rewrite(&mut rewritten, rules);

        Fixed {
            source: print(&rewritten),
            stats,
        }
    }
}
