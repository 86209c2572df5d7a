//! Predicate trees for WHERE, HAVING, and join conditions.

use serde::{Deserialize, Serialize};

use crate::ast::{expr::Expr, select::Select};

/// A predicate: a leaf comparison or a boolean combinator over an ordered
/// sequence of sub-conditions. An absent condition means the owning clause
/// is omitted entirely; there is no `WHERE TRUE` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// `left op right`, e.g. `o.status = 'OPEN'`.
    Compare(Box<Compare>),

    /// Conjunction over the sub-conditions, in sequence order.
    All(Vec<Condition>),

    /// Disjunction over the sub-conditions, in sequence order.
    Any(Vec<Condition>),

    /// `NOT (inner)`.
    Not(Box<Condition>),

    /// `expr IS NULL`, or `expr IS NOT NULL` when negated.
    IsNull { expr: Expr, negated: bool },

    /// `expr IN (…)` against a literal list or a subquery.
    In { expr: Expr, set: InSet },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compare {
    pub left: Expr,
    pub op: CompareOp,
    pub right: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,    // =
    NotEq, // <>
    Lt,    // <
    LtEq,  // <=
    Gt,    // >
    GtEq,  // >=
    Like,  // LIKE
}

/// The right-hand side of a membership test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InSet {
    List(Vec<Expr>),
    Subquery(Box<Select>),
}

impl Condition {
    pub fn compare(left: Expr, op: CompareOp, right: Expr) -> Self {
        Condition::Compare(Box::new(Compare { left, op, right }))
    }

    pub fn eq(left: Expr, right: Expr) -> Self {
        Self::compare(left, CompareOp::Eq, right)
    }

    /// Conjoins another condition, extending an existing `All` in place so
    /// repeated calls build one flat AND list.
    pub fn and(self, other: Condition) -> Condition {
        match self {
            Condition::All(mut list) => {
                list.push(other);
                Condition::All(list)
            }
            first => Condition::All(vec![first, other]),
        }
    }

    /// Disjoins another condition, extending an existing `Any` in place.
    pub fn or(self, other: Condition) -> Condition {
        match self {
            Condition::Any(mut list) => {
                list.push(other);
                Condition::Any(list)
            }
            first => Condition::Any(vec![first, other]),
        }
    }

    pub fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}
