//! Double-dispatch traversal over the closed set of statement variants.

use crate::{
    ast::{delete::Delete, insert::Insert, select::Select, update::Update},
    error::StatementError,
};

/// One handler per statement variant.
///
/// Adding a new traversal (a validator, a dialect-specific renderer, a
/// deep-copy pass) means implementing this trait, not modifying the
/// statement types. Every default handler fails fast with
/// `StatementError::UnsupportedStatement`, so a partial visitor reports the
/// variant it cannot handle instead of silently skipping it. The default
/// SQL renderer implements all four handlers.
pub trait StatementVisitor {
    fn visit_select(&mut self, _stmt: &Select) -> Result<(), StatementError> {
        Err(StatementError::UnsupportedStatement("SELECT"))
    }

    fn visit_insert(&mut self, _stmt: &Insert) -> Result<(), StatementError> {
        Err(StatementError::UnsupportedStatement("INSERT"))
    }

    fn visit_update(&mut self, _stmt: &Update) -> Result<(), StatementError> {
        Err(StatementError::UnsupportedStatement("UPDATE"))
    }

    fn visit_delete(&mut self, _stmt: &Delete) -> Result<(), StatementError> {
        Err(StatementError::UnsupportedStatement("DELETE"))
    }
}
