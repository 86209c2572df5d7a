//! A fluent builder for constructing `Update` trees.

use crate::{
    ast::{
        common::Table,
        condition::Condition,
        expr::Expr,
        update::{Assignment, Update},
    },
    error::StatementError,
};

#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    ast: Update,
}

impl UpdateBuilder {
    pub fn new(table: Table) -> Self {
        Self {
            ast: Update {
                table,
                assignments: Vec::new(),
                where_clause: None,
            },
        }
    }

    /// Appends one SET assignment; assignments render in insertion order.
    pub fn set(mut self, column: &str, value: Expr) -> Self {
        self.ast.assignments.push(Assignment {
            column: column.to_string(),
            value,
        });
        self
    }

    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    /// Finalizes the statement. An UPDATE with nothing to set is a
    /// construction error, never a render-time surprise.
    pub fn build(self) -> Result<Update, StatementError> {
        if self.ast.assignments.is_empty() {
            return Err(StatementError::EmptyAssignments);
        }
        Ok(self.ast)
    }
}
