//! Rendering: turns any statement or expression node into literal SQL text.
//!
//! Rendering is a pure function of the tree's value. The same tree yields
//! byte-identical text on every call; no external state is consulted.

pub mod delete;
pub mod expr;
pub mod insert;
pub mod select;
pub mod update;

use tracing::trace;

use crate::{
    ast::{delete::Delete, insert::Insert, select::Select, update::Update},
    error::StatementError,
    visit::StatementVisitor,
};

/// Accumulates SQL text while a tree is rendered.
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self { sql: String::new() }
    }

    pub fn finish(self) -> String {
        self.sql
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes a node's SQL body into the renderer, without a terminator.
///
/// Statement bodies carry no trailing `;` so they can embed inside other
/// statements (an IN subquery, a SELECT as an INSERT source); `to_sql`
/// appends the terminator at the statement level.
pub trait Render {
    fn render(&self, r: &mut Renderer);
}

fn finish_statement<T: Render>(node: &T) -> String {
    let mut r = Renderer::new();
    node.render(&mut r);
    let mut sql = r.finish();
    sql.push(';');
    trace!(bytes = sql.len(), "rendered statement");
    sql
}

impl Select {
    pub fn to_sql(&self) -> String {
        finish_statement(self)
    }
}

impl Insert {
    pub fn to_sql(&self) -> String {
        finish_statement(self)
    }
}

impl Update {
    pub fn to_sql(&self) -> String {
        finish_statement(self)
    }
}

impl Delete {
    pub fn to_sql(&self) -> String {
        finish_statement(self)
    }
}

/// The default renderer, expressed as a visitor. It is total over the
/// statement variants; `finish` yields the accumulated text.
pub struct SqlRenderer {
    r: Renderer,
}

impl SqlRenderer {
    pub fn new() -> Self {
        Self { r: Renderer::new() }
    }

    pub fn finish(self) -> String {
        self.r.finish()
    }
}

impl Default for SqlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementVisitor for SqlRenderer {
    fn visit_select(&mut self, stmt: &Select) -> Result<(), StatementError> {
        stmt.render(&mut self.r);
        self.r.sql.push(';');
        Ok(())
    }

    fn visit_insert(&mut self, stmt: &Insert) -> Result<(), StatementError> {
        stmt.render(&mut self.r);
        self.r.sql.push(';');
        Ok(())
    }

    fn visit_update(&mut self, stmt: &Update) -> Result<(), StatementError> {
        stmt.render(&mut self.r);
        self.r.sql.push(';');
        Ok(())
    }

    fn visit_delete(&mut self, stmt: &Delete) -> Result<(), StatementError> {
        stmt.render(&mut self.r);
        self.r.sql.push(';');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Statement, common::Table, delete::Delete},
        build::select::SelectBuilder,
    };

    #[test]
    fn renderer_visitor_matches_to_sql() {
        let select = SelectBuilder::new()
            .select()
            .wildcard(None)
            .from(Table::new("users"))
            .build();
        let stmt = Statement::Select(select.clone());

        let mut renderer = SqlRenderer::new();
        stmt.accept(&mut renderer).unwrap();
        assert_eq!(renderer.finish(), select.to_sql());
    }

    #[test]
    fn renderer_is_total_over_variants() {
        let stmt = Statement::Delete(Delete {
            table: Table::new("users"),
            where_clause: None,
        });

        let mut renderer = SqlRenderer::new();
        assert!(stmt.accept(&mut renderer).is_ok());
    }
}
