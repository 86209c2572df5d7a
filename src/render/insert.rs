use crate::{
    ast::insert::{Insert, RowSource, ValuesList},
    render::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        self.table.render(r);
        r.sql.push_str(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql.push_str(column);
        }
        r.sql.push(')');

        // 2. The row source: VALUES list or embedded query.
        r.sql.push(' ');
        self.source.render(r);
    }
}

impl Render for RowSource {
    fn render(&self, r: &mut Renderer) {
        match self {
            RowSource::Values(values) => values.render(r),
            RowSource::Query(select) => select.render(r),
        }
    }
}

impl Render for ValuesList {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str("VALUES ");
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.sql.push('(');
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    r.sql.push_str(", ");
                }
                value.render(r);
            }
            r.sql.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::common::Table,
        build::{insert::InsertBuilder, select::SelectBuilder},
        raw,
    };

    #[test]
    fn batch_insert_with_literal_rows() {
        let stmt = InsertBuilder::new(Table::new("users"))
            .columns(&["name", "is_active"])
            .values(vec![raw("'Alice'"), raw("TRUE")])
            .values(vec![raw("'Bob'"), raw("FALSE")])
            .build()
            .unwrap();

        assert_eq!(
            stmt.to_sql(),
            "INSERT INTO users (name, is_active) VALUES ('Alice', TRUE), ('Bob', FALSE);"
        );
    }

    #[test]
    fn select_embeds_as_row_source() {
        let source = SelectBuilder::new()
            .select()
            .field(crate::ident("name"), "name")
            .field(crate::ident("email"), "email")
            .from(Table::new("staging_users"))
            .build();

        let stmt = InsertBuilder::new(Table::new("users"))
            .columns(&["name", "email"])
            .source(source)
            .build()
            .unwrap();

        assert_eq!(
            stmt.to_sql(),
            "INSERT INTO users (name, email) SELECT email, name FROM staging_users;"
        );
    }
}
