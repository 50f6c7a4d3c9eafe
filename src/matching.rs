// Copyright (C) Brian G. Milnes 2025

//! Call-shape matching
//!
//! Matching is purely syntactic. `fmt.Errorf` means an identifier named
//! `fmt` selected with `Errorf`; aliased imports are not followed and a
//! local variable named `fmt` still matches.

pub mod matching {
    use crate::ast::ast::{CallExpr, Node};

    /// Logger level methods that may start a `.Msg(...)` chain
    pub const LOG_LEVEL_METHODS: [&str; 4] = ["Error", "Info", "Debug", "Warn"];

    /// Terminal method of a chained log event
    pub const MSG_METHOD: &str = "Msg";

    /// True if `call` is `package.function(...)` with a bare identifier on the left
    pub fn is_package_call(call: &CallExpr, package: &str, function: &str) -> bool {
        let Node::Selector(sel) = call.fun.as_ref() else {
            return false;
        };
        let Node::Ident(id) = sel.x.as_ref() else {
            return false;
        };

        id.name == package && sel.sel.name == function
    }

    pub fn is_log_level_method(name: &str) -> bool {
        LOG_LEVEL_METHODS.contains(&name)
    }

    /// True if `call` is `....Msg(...)` and some earlier link of its
    /// method chain is one of `LOG_LEVEL_METHODS`.
    ///
    /// The walk stops at the first receiver that is not itself a method
    /// call, so `Msg(x)` and `logger.Msg(x)` do not match.
    pub fn is_chained_log_message(call: &CallExpr) -> bool {
        let Node::Selector(sel) = call.fun.as_ref() else {
            return false;
        };
        if sel.sel.name != MSG_METHOD {
            return false;
        }

        let mut current = sel.x.as_ref();
        loop {
            let Node::Call(link) = current else {
                return false;
            };
            let Node::Selector(link_sel) = link.fun.as_ref() else {
                return false;
            };
            if is_log_level_method(&link_sel.sel.name) {
                return true;
            }
            current = link_sel.x.as_ref();
        }
    }
}
