//! The UPDATE statement node.

use serde::{Deserialize, Serialize};

use crate::{
    ast::{common::Table, condition::Condition, expr::Expr},
    error::StatementError,
    visit::StatementVisitor,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Update {
    pub table: Table,
    /// SET assignments, rendered in insertion order.
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Condition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub column: String,
    pub value: Expr,
}

impl Update {
    /// Dispatches to the visitor's UPDATE handler.
    pub fn accept<V: StatementVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), StatementError> {
        visitor.visit_update(self)
    }
}
