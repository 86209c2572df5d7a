//! The statement and expression tree.

pub mod common;
pub mod condition;
pub mod delete;
pub mod expr;
pub mod field;
pub mod insert;
pub mod select;
pub mod update;

use serde::{Deserialize, Serialize};

use crate::{
    ast::{delete::Delete, insert::Insert, select::Select, update::Update},
    error::StatementError,
    visit::StatementVisitor,
};

/// The closed set of statement variants. Every visitor matches over this
/// set exhaustively; a new traversal is a new visitor, not a change here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// Dispatches to the visitor handler for the concrete variant.
    pub fn accept<V: StatementVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), StatementError> {
        match self {
            Statement::Select(stmt) => visitor.visit_select(stmt),
            Statement::Insert(stmt) => visitor.visit_insert(stmt),
            Statement::Update(stmt) => visitor.visit_update(stmt),
            Statement::Delete(stmt) => visitor.visit_delete(stmt),
        }
    }

    pub fn to_sql(&self) -> String {
        match self {
            Statement::Select(stmt) => stmt.to_sql(),
            Statement::Insert(stmt) => stmt.to_sql(),
            Statement::Update(stmt) => stmt.to_sql(),
            Statement::Delete(stmt) => stmt.to_sql(),
        }
    }
}
