use crate::{
    ast::select::Select,
    render::{Render, Renderer},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) {
        // 1. SELECT [DISTINCT] projections
        r.sql.push_str("SELECT");
        if self.distinct {
            r.sql.push_str(" DISTINCT");
        }
        let mut first = true;
        for all in &self.field_alls {
            r.sql.push_str(if first { " " } else { ", " });
            first = false;
            all.render(r);
        }
        for def in self.field_defs.values() {
            r.sql.push_str(if first { " " } else { ", " });
            first = false;
            def.render(r);
        }

        // 2. FROM and joins
        r.sql.push_str(" FROM ");
        self.table.render(r);
        for relation in &self.relations {
            r.sql.push(' ');
            relation.render(r);
        }

        // 3. WHERE
        if let Some(where_clause) = &self.where_clause {
            r.sql.push_str(" WHERE ");
            where_clause.render(r);
        }

        // 4. HAVING (before GROUP BY, matching the fixed clause contract)
        if let Some(having) = &self.having {
            r.sql.push_str(" HAVING ");
            having.render(r);
        }

        // 5. GROUP BY
        if !self.group_by.is_empty() {
            r.sql.push_str(" GROUP BY ");
            for (i, key) in self.group_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                key.render(r);
            }
        }

        // 6. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, item) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                item.render(r);
            }
        }

        // 7. OFFSET, then LIMIT
        if let Some(offset) = self.offset {
            r.sql.push_str(" OFFSET ");
            r.sql.push_str(&offset.to_string());
        }
        if let Some(limit) = self.limit {
            r.sql.push_str(" LIMIT ");
            r.sql.push_str(&limit.to_string());
        }
    }
}
