//! The DELETE statement node.

use serde::{Deserialize, Serialize};

use crate::{
    ast::{common::Table, condition::Condition},
    error::StatementError,
    visit::StatementVisitor,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delete {
    pub table: Table,
    pub where_clause: Option<Condition>,
}

impl Delete {
    /// Dispatches to the visitor's DELETE handler.
    pub fn accept<V: StatementVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), StatementError> {
        visitor.visit_delete(self)
    }
}
