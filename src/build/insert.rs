//! A fluent builder for constructing `Insert` trees.

use crate::{
    ast::{
        common::Table,
        expr::Expr,
        insert::{Insert, InsertSource, RowSource, ValuesList},
    },
    error::StatementError,
};

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: Table,
    columns: Vec<String>,
    source: Option<RowSource>,
}

impl InsertBuilder {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            columns: Vec::new(),
            source: None,
        }
    }

    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Adds a row of values. May be called repeatedly for a batch insert;
    /// appends to an existing VALUES source, or starts one.
    pub fn values(mut self, row: Vec<Expr>) -> Self {
        match self.source {
            Some(RowSource::Values(ref mut values)) => values.rows.push(row),
            _ => {
                self.source = Some(RowSource::Values(ValuesList::new(vec![row])));
            }
        }
        self
    }

    /// Sets the row source through the `InsertSource` capability: a built
    /// SELECT, a `ValuesList`, or a `RowSource` all work here. Replaces any
    /// previously supplied source.
    pub fn source(mut self, source: impl InsertSource) -> Self {
        self.source = Some(source.into_row_source());
        self
    }

    /// Finalizes the statement. Fails if no columns or no source were
    /// given, or if a literal row's width does not match the column list.
    pub fn build(self) -> Result<Insert, StatementError> {
        if self.columns.is_empty() {
            return Err(StatementError::EmptyColumns);
        }
        let source = self.source.ok_or(StatementError::MissingSource)?;

        if let RowSource::Values(values) = &source {
            if values.rows.is_empty() {
                return Err(StatementError::MissingSource);
            }
            for row in &values.rows {
                if row.len() != self.columns.len() {
                    return Err(StatementError::RowArity {
                        expected: self.columns.len(),
                        found: row.len(),
                    });
                }
            }
        }

        Ok(Insert {
            table: self.table,
            columns: self.columns,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{common::Table, insert::RowSource},
        build::{insert::InsertBuilder, select::SelectBuilder},
        error::StatementError,
        ident, raw,
    };

    #[test]
    fn build_single_insert() {
        let ast = InsertBuilder::new(Table::new("users"))
            .columns(&["name", "email"])
            .values(vec![raw("'Alice'"), raw("'a@test.com'")])
            .build()
            .unwrap();

        assert_eq!(ast.table.name, "users");
        assert_eq!(ast.columns, vec!["name", "email"]);
        match &ast.source {
            RowSource::Values(values) => assert_eq!(values.rows.len(), 1),
            RowSource::Query(_) => panic!("expected a VALUES source"),
        }
    }

    #[test]
    fn build_batch_insert() {
        let ast = InsertBuilder::new(Table::new("logs"))
            .columns(&["level", "message"])
            .values(vec![raw("'info'"), raw("'started'")])
            .values(vec![raw("'warn'"), raw("'deprecated'")])
            .build()
            .unwrap();

        match ast.source {
            RowSource::Values(values) => assert_eq!(values.rows.len(), 2),
            RowSource::Query(_) => panic!("expected a VALUES source"),
        }
    }

    #[test]
    fn build_insert_from_select() {
        let select = SelectBuilder::new()
            .select()
            .field(ident("id"), "id")
            .from(Table::new("staging"))
            .build();

        let ast = InsertBuilder::new(Table::new("live"))
            .columns(&["id"])
            .source(select.clone())
            .build()
            .unwrap();

        assert_eq!(ast.source, RowSource::Query(Box::new(select)));
    }

    #[test]
    fn missing_source_is_a_construction_error() {
        let err = InsertBuilder::new(Table::new("users"))
            .columns(&["name"])
            .build()
            .unwrap_err();
        assert_eq!(err, StatementError::MissingSource);
    }

    #[test]
    fn missing_columns_is_a_construction_error() {
        let err = InsertBuilder::new(Table::new("users"))
            .values(vec![raw("'Alice'")])
            .build()
            .unwrap_err();
        assert_eq!(err, StatementError::EmptyColumns);
    }

    #[test]
    fn row_arity_mismatch_is_a_construction_error() {
        let err = InsertBuilder::new(Table::new("users"))
            .columns(&["name", "email"])
            .values(vec![raw("'Alice'")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            StatementError::RowArity {
                expected: 2,
                found: 1
            }
        );
    }
}
