// Copyright (C) Brian G. Milnes 2025

//! Owned Go syntax tree that the rules operate on
//!
//! The tree-sitter CST is lowered into a closed set of node kinds:
//! calls, selectors, identifiers, basic literals, binary expressions,
//! and an `Other` catch-all that keeps its named children so nested
//! calls stay reachable. Literal values are the only mutable text.

pub mod ast {
    /// Byte range of a node in the original source, plus its 1-based start position
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Span {
        pub start: usize,
        pub end: usize,
        pub line: usize,
        pub column: usize,
    }

    /// Kind of a basic literal, mirroring Go's token kinds
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LitKind {
        Int,
        Float,
        Imag,
        Char,
        String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Node {
        Call(CallExpr),
        Selector(SelectorExpr),
        Ident(Ident),
        BasicLit(BasicLit),
        Binary(BinaryExpr),
        Other(OtherNode),
    }

    /// `fun(args...)`
    #[derive(Debug, Clone, PartialEq)]
    pub struct CallExpr {
        pub fun: Box<Node>,
        pub args: Vec<Node>,
        pub span: Span,
    }

    /// `x.sel`
    #[derive(Debug, Clone, PartialEq)]
    pub struct SelectorExpr {
        pub x: Box<Node>,
        pub sel: Ident,
        pub span: Span,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Ident {
        pub name: String,
        pub span: Span,
    }

    /// A literal leaf. `value` includes the delimiters, e.g. `"hello"`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct BasicLit {
        pub kind: LitKind,
        pub value: String,
        pub span: Span,
    }

    /// `x op y`
    #[derive(Debug, Clone, PartialEq)]
    pub struct BinaryExpr {
        pub x: Box<Node>,
        pub op: String,
        pub y: Box<Node>,
        pub span: Span,
    }

    /// Any node kind the rules do not look into directly
    #[derive(Debug, Clone, PartialEq)]
    pub struct OtherNode {
        pub kind: String,
        pub children: Vec<Node>,
        pub span: Span,
    }

    /// A parsed file: the source text it came from and its lowered root
    #[derive(Debug, Clone)]
    pub struct SourceFile {
        pub source: String,
        pub root: Node,
    }

    impl Node {
        pub fn span(&self) -> Span {
            match self {
                Node::Call(n) => n.span,
                Node::Selector(n) => n.span,
                Node::Ident(n) => n.span,
                Node::BasicLit(n) => n.span,
                Node::Binary(n) => n.span,
                Node::Other(n) => n.span,
            }
        }

        /// Short label used by the tree dump
        pub fn label(&self) -> String {
            match self {
                Node::Call(_) => "Call".to_string(),
                Node::Selector(s) => format!("Selector .{}", s.sel.name),
                Node::Ident(i) => format!("Ident {}", i.name),
                Node::BasicLit(l) => format!("BasicLit {:?} {}", l.kind, l.value),
                Node::Binary(b) => format!("Binary {}", b.op),
                Node::Other(o) => o.kind.clone(),
            }
        }
    }

    impl BinaryExpr {
        /// True for `x + y`, the only operator treated as message concatenation
        pub fn is_concat(&self) -> bool {
            self.op == "+"
        }
    }

    impl BasicLit {
        pub fn is_string(&self) -> bool {
            self.kind == LitKind::String
        }
    }

    impl SourceFile {
        /// Original text of a span
        pub fn text(&self, span: Span) -> &str {
            &self.source[span.start..span.end]
        }
    }
}
