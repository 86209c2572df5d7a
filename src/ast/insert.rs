//! The INSERT statement node and the `InsertSource` capability.

use serde::{Deserialize, Serialize};

use crate::{
    ast::{common::Table, expr::Expr, select::Select},
    error::StatementError,
    visit::StatementVisitor,
};

/// A full INSERT statement: target table, column list, and a row source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insert {
    pub table: Table,
    pub columns: Vec<String>,
    pub source: RowSource,
}

impl Insert {
    /// Dispatches to the visitor's INSERT handler.
    pub fn accept<V: StatementVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), StatementError> {
        visitor.visit_insert(self)
    }
}

/// The data-producing clause of an INSERT: either literal rows or a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowSource {
    Values(ValuesList),
    Query(Box<Select>),
}

/// A literal VALUES list; each inner vector is one row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ValuesList {
    pub rows: Vec<Vec<Expr>>,
}

impl ValuesList {
    pub fn new(rows: Vec<Vec<Expr>>) -> Self {
        Self { rows }
    }
}

/// Capability contract for any node usable as the row source of an INSERT.
///
/// A SELECT and a literal VALUES list both implement this, so an INSERT
/// builder takes either without knowing which it was given.
pub trait InsertSource {
    fn into_row_source(self) -> RowSource;
}

impl InsertSource for Select {
    fn into_row_source(self) -> RowSource {
        RowSource::Query(Box::new(self))
    }
}

impl InsertSource for ValuesList {
    fn into_row_source(self) -> RowSource {
        RowSource::Values(self)
    }
}

impl InsertSource for RowSource {
    fn into_row_source(self) -> RowSource {
        self
    }
}
