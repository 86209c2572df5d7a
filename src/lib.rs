//! An in-memory tree representation of SQL statements together with a
//! deterministic renderer that turns the tree into literal SQL text.
//!
//! Statements are assembled from typed building blocks (fields, tables,
//! joins, conditions, ordering, pagination) instead of string concatenation.
//! All nodes are immutable once constructed, compare by value, and render
//! to byte-identical text on every call.

use crate::ast::expr::{Expr, Ident};

pub mod ast;
pub mod build;
pub mod error;
pub mod macros;
pub mod render;
pub mod visit;

pub use crate::ast::Statement;
pub use crate::error::StatementError;

pub fn ident(name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: None,
        name: name.to_string(),
    })
}

pub fn qualified(qualifier: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    })
}

/// Wraps a verbatim SQL fragment (a literal, a placeholder, an arbitrary
/// expression). The fragment is emitted unchanged; nothing is escaped here.
pub fn raw(fragment: &str) -> Expr {
    Expr::Raw(fragment.to_string())
}
