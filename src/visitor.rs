// Copyright (C) Brian G. Milnes 2025

//! Traversal driver: hands every call expression to the selected rules

pub mod visitor {
    use serde::Serialize;
    use std::collections::BTreeMap;

    use crate::ast::ast::{Node, SourceFile};
    use crate::rules::rules::Rule;

    /// Per-rule count of calls whose message was rewritten
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
    pub struct RewriteStats {
        pub calls_visited: usize,
        pub rewrites: BTreeMap<Rule, usize>,
    }

    impl RewriteStats {
        pub fn total_rewrites(&self) -> usize {
            self.rewrites.values().sum()
        }

        pub fn count(&self, rule: Rule) -> usize {
            self.rewrites.get(&rule).copied().unwrap_or(0)
        }
    }

    /// A visitor that applies rules to every call it meets
    pub struct RuleVisitor<'r> {
        rules: &'r [Rule],
        pub stats: RewriteStats,
    }

    impl<'r> RuleVisitor<'r> {
        pub fn new(rules: &'r [Rule]) -> Self {
            RuleVisitor {
                rules,
                stats: RewriteStats::default(),
            }
        }

        /// Pre-order, source-order walk. A call is visited before the calls
        /// nested in its callee and arguments.
        pub fn visit(&mut self, node: &mut Node) {
            match node {
                Node::Call(call) => {
                    self.stats.calls_visited += 1;
                    for rule in self.rules {
                        if rule.apply(call) {
                            *self.stats.rewrites.entry(*rule).or_insert(0) += 1;
                        }
                    }
                    self.visit(&mut call.fun);
                    for arg in &mut call.args {
                        self.visit(arg);
                    }
                }
                Node::Selector(sel) => self.visit(&mut sel.x),
                Node::Binary(bin) => {
                    self.visit(&mut bin.x);
                    self.visit(&mut bin.y);
                }
                Node::Other(other) => {
                    for child in &mut other.children {
                        self.visit(child);
                    }
                }
                Node::Ident(_) | Node::BasicLit(_) => {}
            }
        }
    }

    /// Apply `rules` to every call in `file`, in place
    pub fn rewrite(file: &mut SourceFile, rules: &[Rule]) -> RewriteStats {
        let mut visitor = RuleVisitor::new(rules);
        visitor.visit(&mut file.root);
        visitor.stats
    }
}
