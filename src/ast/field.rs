//! Field projections: wildcards and aliased expressions.

use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;

/// A wildcard projection, optionally table-qualified: `*` or `t.*`.
///
/// Wildcards are kept as an ordered sequence; order of appearance is
/// preserved in the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldAll {
    pub table: Option<String>,
}

impl FieldAll {
    pub fn new() -> Self {
        Self { table: None }
    }

    pub fn of(table: &str) -> Self {
        Self {
            table: Some(table.to_string()),
        }
    }
}

impl Default for FieldAll {
    fn default() -> Self {
        Self::new()
    }
}

/// One projected expression with an alias.
///
/// Within a statement, field definitions live in a map keyed by alias: a
/// later definition with the same alias silently replaces an earlier one,
/// and rendering order is alias-lexicographic (the map's iteration order).
///
/// Renders `expr AS alias`, except when the expression is an unqualified
/// identifier equal to its alias, which renders as the bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDef {
    pub expr: Expr,
    pub alias: String,
}

impl FieldDef {
    pub fn new(expr: Expr, alias: &str) -> Self {
        Self {
            expr,
            alias: alias.to_string(),
        }
    }
}
