//! A type-safe, fluent builder for constructing `Select` trees.

// --- Typestate Marker Structs ---
// These states ensure clauses are added in the correct SQL order at compile
// time, and that a built statement always carries its base table.

use std::collections::BTreeMap;

use crate::ast::{
    common::{JoinKind, OrderByItem, OrderDir, Relation, Table},
    condition::Condition,
    expr::Expr,
    field::{FieldAll, FieldDef},
    select::Select,
};

/// The initial state, before the projection list is started.
#[derive(Debug, Default, Clone)]
pub struct InitialState;

/// The state while the projection list is assembled.
#[derive(Debug, Default, Clone)]
pub struct SelectState;

/// The state after `FROM`; the base table is now held by the state itself,
/// so `build` can never be reached without one.
#[derive(Debug, Clone)]
pub struct FromState {
    table: Table,
}

// --- The Main Builder ---

#[derive(Debug, Clone)]
pub struct SelectBuilder<State> {
    parts: Parts,
    state: State,
}

#[derive(Debug, Default, Clone)]
struct Parts {
    distinct: bool,
    field_alls: Vec<FieldAll>,
    field_defs: BTreeMap<String, FieldDef>,
    relations: Vec<Relation>,
    where_clause: Option<Condition>,
    having: Option<Condition>,
    group_by: Vec<Expr>,
    order_by: Vec<OrderByItem>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl SelectBuilder<InitialState> {
    pub fn new() -> Self {
        Self {
            parts: Parts::default(),
            state: InitialState,
        }
    }

    /// Starts the `SELECT` clause. This is the entry point for building.
    pub fn select(self) -> SelectBuilder<SelectState> {
        SelectBuilder {
            parts: self.parts,
            state: SelectState,
        }
    }
}

impl Default for SelectBuilder<InitialState> {
    fn default() -> Self {
        Self::new()
    }
}

/// Projection-list state: add DISTINCT, wildcards, and field definitions,
/// then move on with `from`.
impl SelectBuilder<SelectState> {
    pub fn distinct(mut self) -> Self {
        self.parts.distinct = true;
        self
    }

    /// Adds a wildcard projection, optionally table-qualified (`t.*`).
    /// Wildcards keep their order of appearance.
    pub fn wildcard(mut self, table: Option<&str>) -> Self {
        self.parts.field_alls.push(FieldAll {
            table: table.map(String::from),
        });
        self
    }

    /// Adds a projected expression under an alias. The alias is the key:
    /// a later definition with the same alias replaces the earlier one.
    pub fn field(mut self, expr: Expr, alias: &str) -> Self {
        self.parts
            .field_defs
            .insert(alias.to_string(), FieldDef::new(expr, alias));
        self
    }

    /// Adds the `FROM` clause specifying the base table.
    pub fn from(self, table: Table) -> SelectBuilder<FromState> {
        SelectBuilder {
            parts: self.parts,
            state: FromState { table },
        }
    }
}

/// Post-`FROM` state: optional clauses, then `build`.
impl SelectBuilder<FromState> {
    /// Adds a join. Joins render after the base table in insertion order.
    pub fn join(mut self, kind: JoinKind, table: Table, on: Condition) -> Self {
        self.parts.relations.push(Relation { kind, table, on });
        self
    }

    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.parts.where_clause = Some(condition);
        self
    }

    pub fn having(mut self, condition: Condition) -> Self {
        self.parts.having = Some(condition);
        self
    }

    /// Appends one grouping key.
    pub fn group_by(mut self, key: Expr) -> Self {
        self.parts.group_by.push(key);
        self
    }

    /// Appends one sort key; sequence order is the sort precedence.
    pub fn order_by(mut self, expr: Expr, dir: Option<OrderDir>) -> Self {
        self.parts.order_by.push(OrderByItem { expr, dir });
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.parts.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.parts.limit = Some(limit);
        self
    }

    /// Finalizes and returns the constructed `Select` tree.
    pub fn build(self) -> Select {
        Select {
            distinct: self.parts.distinct,
            field_alls: self.parts.field_alls,
            field_defs: self.parts.field_defs,
            table: self.state.table,
            relations: self.parts.relations,
            where_clause: self.parts.where_clause,
            having: self.parts.having,
            group_by: self.parts.group_by,
            order_by: self.parts.order_by,
            offset: self.parts.offset,
            limit: self.parts.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::common::{JoinKind, OrderDir, Table},
        ast::condition::Condition,
        build::select::SelectBuilder,
        ident, qualified, raw,
    };

    #[test]
    fn build_simple_select() {
        let ast = SelectBuilder::new()
            .select()
            .field(ident("id"), "id")
            .field(ident("name"), "name")
            .from(Table::new("users"))
            .build();

        assert_eq!(ast.field_defs.len(), 2);
        assert_eq!(ast.table.name, "users");
        assert!(ast.where_clause.is_none());
        assert!(!ast.distinct);
    }

    #[test]
    fn build_with_where_clause() {
        let ast = SelectBuilder::new()
            .select()
            .field(ident("email"), "email")
            .from(Table::aliased("users", "u"))
            .where_clause(Condition::eq(qualified("u", "status"), raw("'active'")))
            .build();

        assert_eq!(ast.table.alias, Some("u".to_string()));
        assert!(matches!(ast.where_clause, Some(Condition::Compare(_))));
    }

    #[test]
    fn build_with_join_and_ordering() {
        let ast = SelectBuilder::new()
            .select()
            .field(qualified("u", "name"), "name")
            .field(qualified("p", "title"), "title")
            .from(Table::aliased("users", "u"))
            .join(
                JoinKind::Left,
                Table::aliased("posts", "p"),
                Condition::eq(qualified("u", "id"), qualified("p", "user_id")),
            )
            .order_by(qualified("p", "created_at"), Some(OrderDir::Desc))
            .build();

        assert_eq!(ast.relations.len(), 1);
        assert_eq!(ast.order_by.len(), 1);
        assert_eq!(ast.order_by[0].dir, Some(OrderDir::Desc));
    }

    #[test]
    fn build_with_limit_and_offset() {
        let ast = SelectBuilder::new()
            .select()
            .field(ident("id"), "id")
            .from(Table::new("products"))
            .limit(50)
            .offset(100)
            .build();

        assert_eq!(ast.limit, Some(50));
        assert_eq!(ast.offset, Some(100));
    }

    #[test]
    fn empty_collections_equal_untouched_ones() {
        let bare = SelectBuilder::new()
            .select()
            .wildcard(None)
            .from(Table::new("users"))
            .build();

        // Same statement, but with collections that were never written to
        // versus ones constructed empty by hand.
        let mut explicit = bare.clone();
        explicit.group_by = Vec::new();
        explicit.relations = Vec::new();
        explicit.field_defs = Default::default();

        assert_eq!(bare, explicit);
    }
}
