//! Common, reusable AST nodes shared by every statement variant.

use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;

/// A relation source: a table name with an optional alias.
///
/// Renders as `name` or `name alias` (space separated, no `AS`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn aliased(name: &str, alias: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: Some(alias.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

/// A join clause: kind, joined table, and join predicate.
///
/// Relations render after the base table in insertion order; the order is
/// part of the generated SQL and is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub kind: JoinKind,
    pub table: Table,
    pub on: crate::ast::condition::Condition,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderDir {
    Asc,
    Desc,
}

/// One sort key. Sequence order is the sort precedence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderByItem {
    pub expr: Expr,
    pub dir: Option<OrderDir>,
}
