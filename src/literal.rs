// Copyright (C) Brian G. Milnes 2025

//! Literal locator and character-level literal edits
//!
//! A message argument is either a string literal or a left-associative
//! `+` chain of fragments. The locator finds the first fragment (the
//! start of the message) and, for the wrapped-error rule, every fragment
//! of the chain in source order. Edits only ever touch the text between
//! a literal's delimiters.

pub mod literal {
    use crate::ast::ast::{BasicLit, Node};

    /// Case mapping applied to the first character of a message
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Upper,
        Lower,
    }

    /// The literal that starts the message in `arg`.
    ///
    /// Walks down the left operand of `+` chains. Anything that is not a
    /// string literal at the bottom (identifier, call, number) yields `None`.
    pub fn start_literal(arg: &mut Node) -> Option<&mut BasicLit> {
        let mut current = arg;
        while is_concat(current) {
            let Node::Binary(bin) = current else {
                return None;
            };
            current = &mut *bin.x;
        }
        as_string_literal(current)
    }

    /// Every fragment of the concatenation chain in `arg`, leftmost first.
    ///
    /// Fragments that are not string literals appear as `None` so that
    /// adjacency between literal fragments is preserved.
    pub fn chain_segments(arg: &mut Node) -> Vec<Option<&mut BasicLit>> {
        // Right operands are collected walking down the left spine, so reversed
        let mut segments = Vec::new();
        let mut current = arg;
        while is_concat(current) {
            let Node::Binary(bin) = current else {
                break;
            };
            segments.push(as_string_literal(&mut bin.y));
            current = &mut *bin.x;
        }
        segments.push(as_string_literal(current));
        segments.reverse();
        segments
    }

    fn is_concat(node: &Node) -> bool {
        matches!(node, Node::Binary(bin) if bin.is_concat())
    }

    fn as_string_literal(node: &mut Node) -> Option<&mut BasicLit> {
        match node {
            Node::BasicLit(lit) if lit.is_string() => Some(lit),
            _ => None,
        }
    }

    impl BasicLit {
        /// Text between the delimiters, or `None` for an empty or malformed literal
        pub fn content(&self) -> Option<&str> {
            let value = self.value.as_str();
            if value.len() <= 2 {
                return None;
            }
            let open = value.chars().next()?;
            if !matches!(open, '"' | '`') || !value.ends_with(open) {
                return None;
            }
            value.get(1..value.len() - 1)
        }

        /// Replace the content, keeping the original delimiters
        fn set_content(&mut self, content: &str) {
            let Some(open) = self.value.chars().next() else {
                return;
            };
            self.value = format!("{open}{content}{open}");
        }

        /// Apply `case` to the first content character. Returns true if the value changed.
        pub fn recase_first(&mut self, case: Case) -> bool {
            let Some(content) = self.content() else {
                return false;
            };
            let mut chars = content.chars();
            let Some(first) = chars.next() else {
                return false;
            };

            let mapped: String = match case {
                Case::Upper => first.to_uppercase().collect(),
                Case::Lower => first.to_lowercase().collect(),
            };
            if mapped.chars().eq(std::iter::once(first)) {
                return false;
            }

            let updated = format!("{mapped}{}", chars.as_str());
            self.set_content(&updated);
            true
        }

        /// Replace every occurrence of `from` in the content with `to`
        pub fn replace_in_content(&mut self, from: &str, to: &str) -> bool {
            let Some(content) = self.content() else {
                return false;
            };
            if !content.contains(from) {
                return false;
            }

            let updated = content.replace(from, to);
            self.set_content(&updated);
            true
        }

        /// Prepend `prefix` to the content
        pub fn prefix_content(&mut self, prefix: &str) -> bool {
            let Some(content) = self.content() else {
                return false;
            };

            let updated = format!("{prefix}{content}");
            self.set_content(&updated);
            true
        }
    }
}
