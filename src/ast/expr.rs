//! SQL expressions: the leaves of condition trees and field projections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A column or table identifier, e.g. `status` or `o.status`.
    Identifier(Ident),

    /// A verbatim SQL fragment: a literal such as `'OPEN'`, a placeholder
    /// such as `?`, or any already-safe expression text. Emitted unchanged;
    /// escaping is the execution layer's concern, never this crate's.
    Raw(String),

    /// A function call, e.g. `COUNT(*)` or `SUM(amount)`.
    FunctionCall(FunctionCall),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g. the 'o' in 'o.status'
    pub name: String,              // e.g. the 'status' in 'o.status'
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
    pub wildcard: bool, // the '*' in 'COUNT(*)'
}

impl Expr {
    /// The unqualified identifier name, if this expression is one.
    pub fn as_plain_ident(&self) -> Option<&str> {
        match self {
            Expr::Identifier(Ident {
                qualifier: None,
                name,
            }) => Some(name),
            _ => None,
        }
    }
}
