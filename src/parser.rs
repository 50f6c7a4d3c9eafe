// Copyright (C) Brian G. Milnes 2025

//! Parser module: Go source text to the owned syntax tree
//!
//! Parsing is done by tree-sitter with the Go grammar. The resulting CST
//! is lowered into `ast::Node`, keeping only the shapes the rules match on
//! and a generic container for everything else.

pub mod parser {
    use anyhow::{anyhow, Context, Result};
    use std::path::Path;

    use crate::ast::ast::{
        BasicLit, BinaryExpr, CallExpr, Ident, LitKind, Node, OtherNode, SelectorExpr, SourceFile,
        Span,
    };

    /// Go parser backed by tree-sitter-go
    pub struct GoParser {
        parser: tree_sitter::Parser,
    }

    impl GoParser {
        pub fn new() -> Result<Self> {
            let mut parser = tree_sitter::Parser::new();
            let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
            parser
                .set_language(&language)
                .map_err(|e| anyhow!("Failed to set Go language: {e}"))?;

            Ok(Self { parser })
        }

        /// Parse a complete Go file. Any syntax error rejects the whole file.
        pub fn parse(&mut self, source: &str) -> Result<SourceFile> {
            let tree = self
                .parser
                .parse(source, None)
                .ok_or_else(|| anyhow!("Parser returned no tree"))?;
            let root = tree.root_node();

            if root.has_error() {
                let bad = first_error(root).unwrap_or(root);
                let pos = bad.start_position();
                return Err(anyhow!(
                    "Parse error at {}:{}: {}",
                    pos.row + 1,
                    pos.column + 1,
                    describe_error(bad, source)
                ));
            }

            Ok(SourceFile {
                source: source.to_string(),
                root: self.convert_node(root, source),
            })
        }

        fn convert_node(&self, node: tree_sitter::Node, source: &str) -> Node {
            match node.kind() {
                "call_expression" => self.convert_call(node, source),
                "selector_expression" => self.convert_selector(node, source),
                "binary_expression" => self.convert_binary(node, source),
                "identifier" | "package_identifier" | "field_identifier" => Node::Ident(Ident {
                    name: node_text(node, source).to_string(),
                    span: span_of(node),
                }),
                "interpreted_string_literal" | "raw_string_literal" => {
                    convert_literal(node, source, LitKind::String)
                }
                "int_literal" => convert_literal(node, source, LitKind::Int),
                "float_literal" => convert_literal(node, source, LitKind::Float),
                "imaginary_literal" => convert_literal(node, source, LitKind::Imag),
                "rune_literal" => convert_literal(node, source, LitKind::Char),
                _ => self.convert_other(node, source),
            }
        }

        fn convert_call(&self, node: tree_sitter::Node, source: &str) -> Node {
            let Some(function) = node.child_by_field_name("function") else {
                return self.convert_other(node, source);
            };

            let args = node
                .child_by_field_name("arguments")
                .map(|list| self.convert_children(list, source))
                .unwrap_or_default();

            Node::Call(CallExpr {
                fun: Box::new(self.convert_node(function, source)),
                args,
                span: span_of(node),
            })
        }

        fn convert_selector(&self, node: tree_sitter::Node, source: &str) -> Node {
            let (Some(operand), Some(field)) = (
                node.child_by_field_name("operand"),
                node.child_by_field_name("field"),
            ) else {
                return self.convert_other(node, source);
            };

            Node::Selector(SelectorExpr {
                x: Box::new(self.convert_node(operand, source)),
                sel: Ident {
                    name: node_text(field, source).to_string(),
                    span: span_of(field),
                },
                span: span_of(node),
            })
        }

        fn convert_binary(&self, node: tree_sitter::Node, source: &str) -> Node {
            let (Some(left), Some(operator), Some(right)) = (
                node.child_by_field_name("left"),
                node.child_by_field_name("operator"),
                node.child_by_field_name("right"),
            ) else {
                return self.convert_other(node, source);
            };

            Node::Binary(BinaryExpr {
                x: Box::new(self.convert_node(left, source)),
                op: node_text(operator, source).to_string(),
                y: Box::new(self.convert_node(right, source)),
                span: span_of(node),
            })
        }

        fn convert_other(&self, node: tree_sitter::Node, source: &str) -> Node {
            Node::Other(OtherNode {
                kind: node.kind().to_string(),
                children: self.convert_children(node, source),
                span: span_of(node),
            })
        }

        /// Named children in source order, comments dropped
        fn convert_children(&self, node: tree_sitter::Node, source: &str) -> Vec<Node> {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .filter(|child| child.kind() != "comment")
                .map(|child| self.convert_node(child, source))
                .collect()
        }
    }

    /// Parse Go source text
    pub fn parse_source(source: &str) -> Result<SourceFile> {
        GoParser::new()?.parse(source)
    }

    /// Read and parse a Go file
    pub fn parse_path(path: &Path) -> Result<SourceFile> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse_source(&source).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn convert_literal(node: tree_sitter::Node, source: &str, kind: LitKind) -> Node {
        Node::BasicLit(BasicLit {
            kind,
            value: node_text(node, source).to_string(),
            span: span_of(node),
        })
    }

    fn node_text<'a>(node: tree_sitter::Node, source: &'a str) -> &'a str {
        source.get(node.byte_range()).unwrap_or("")
    }

    fn span_of(node: tree_sitter::Node) -> Span {
        let pos = node.start_position();
        Span {
            start: node.start_byte(),
            end: node.end_byte(),
            line: pos.row + 1,
            column: pos.column + 1,
        }
    }

    /// Depth-first search for the first ERROR or MISSING node
    fn first_error(node: tree_sitter::Node) -> Option<tree_sitter::Node> {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_error() || child.is_missing() {
                return Some(child);
            }
            if child.has_error() {
                if let Some(found) = first_error(child) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn describe_error(node: tree_sitter::Node, source: &str) -> String {
        if node.is_missing() {
            return format!("missing {}", node.kind());
        }

        let text = node_text(node, source);
        let snippet: String = text.lines().next().unwrap_or("").chars().take(40).collect();
        if snippet.is_empty() {
            "unexpected end of input".to_string()
        } else {
            format!("unexpected `{snippet}`")
        }
    }
}
