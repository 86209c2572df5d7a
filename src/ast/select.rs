//! The SELECT statement node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    ast::{
        common::{OrderByItem, Relation, Table},
        condition::Condition,
        expr::Expr,
        field::{FieldAll, FieldDef},
    },
    error::StatementError,
    visit::StatementVisitor,
};

/// A full SELECT statement.
///
/// Optional collections are plain `Vec`/`BTreeMap` values where empty is
/// the one canonical "absent" representation, so derived equality already
/// treats a statement built with an empty collection as equal to one built
/// with none at all. Offset and limit use `Option` as the unset sentinel;
/// `None` renders no fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Select {
    pub distinct: bool,
    pub field_alls: Vec<FieldAll>,
    /// Keyed by alias; rendered in alias-lexicographic order.
    pub field_defs: BTreeMap<String, FieldDef>,
    pub table: Table,
    pub relations: Vec<Relation>,
    pub where_clause: Option<Condition>,
    pub having: Option<Condition>,
    pub group_by: Vec<Expr>,
    pub order_by: Vec<OrderByItem>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Select {
    /// Dispatches to the visitor's SELECT handler.
    pub fn accept<V: StatementVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), StatementError> {
        visitor.visit_select(self)
    }
}
