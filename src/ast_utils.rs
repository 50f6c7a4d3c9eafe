// Copyright (C) Brian G. Milnes 2025

//! Read-only queries over the lowered Go tree
//!
//! Provides common functions for walking and querying the syntax tree

pub mod ast_utils {
    use crate::ast::ast::{BasicLit, CallExpr, Node};

    /// Immediate children of a node, in source order
    pub fn children(node: &Node) -> Vec<&Node> {
        match node {
            Node::Call(call) => std::iter::once(call.fun.as_ref())
                .chain(call.args.iter())
                .collect(),
            Node::Selector(sel) => vec![sel.x.as_ref()],
            Node::Binary(bin) => vec![bin.x.as_ref(), bin.y.as_ref()],
            Node::Other(other) => other.children.iter().collect(),
            Node::Ident(_) | Node::BasicLit(_) => Vec::new(),
        }
    }

    /// Find all nodes matching a predicate, pre-order
    pub fn find_nodes_where<F>(root: &Node, predicate: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        let mut results = Vec::new();
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if predicate(node) {
                results.push(node);
            }
            stack.extend(children(node).into_iter().rev());
        }

        results
    }

    /// All call expressions, pre-order
    pub fn find_calls(root: &Node) -> Vec<&CallExpr> {
        find_nodes_where(root, |n| matches!(n, Node::Call(_)))
            .into_iter()
            .filter_map(|n| match n {
                Node::Call(call) => Some(call),
                _ => None,
            })
            .collect()
    }

    /// All string literals, in source order
    pub fn string_literals(root: &Node) -> Vec<&BasicLit> {
        find_nodes_where(root, |n| matches!(n, Node::BasicLit(lit) if lit.is_string()))
            .into_iter()
            .filter_map(|n| match n {
                Node::BasicLit(lit) => Some(lit),
                _ => None,
            })
            .collect()
    }

    /// Indented one-line-per-node dump of the tree
    pub fn dump_tree(root: &Node) -> String {
        let mut out = String::new();
        dump_into(root, 0, &mut out);
        out
    }

    fn dump_into(node: &Node, depth: usize, out: &mut String) {
        let span = node.span();
        out.push_str(&format!(
            "{}{} @{}:{}\n",
            "  ".repeat(depth),
            node.label(),
            span.line,
            span.column
        ));
        for child in children(node) {
            dump_into(child, depth + 1, out);
        }
    }
}
