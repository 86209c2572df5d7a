//! A fluent builder for constructing `Delete` trees.

use crate::ast::{common::Table, condition::Condition, delete::Delete};

#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    ast: Delete,
}

impl DeleteBuilder {
    pub fn new(table: Table) -> Self {
        Self {
            ast: Delete {
                table,
                where_clause: None,
            },
        }
    }

    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.ast.where_clause = Some(condition);
        self
    }

    pub fn build(self) -> Delete {
        self.ast
    }
}
