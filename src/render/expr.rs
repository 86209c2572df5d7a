use crate::{
    ast::{
        common::{JoinKind, OrderByItem, OrderDir, Relation, Table},
        condition::{Compare, CompareOp, Condition, InSet},
        expr::{Expr, FunctionCall, Ident},
        field::{FieldAll, FieldDef},
    },
    render::{Render, Renderer},
};

impl Render for Expr {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expr::Identifier(ident) => ident.render(r),
            Expr::Raw(fragment) => r.sql.push_str(fragment),
            Expr::FunctionCall(func) => func.render(r),
        }
    }
}

impl Render for Ident {
    fn render(&self, r: &mut Renderer) {
        if let Some(qualifier) = &self.qualifier {
            r.sql.push_str(qualifier);
            r.sql.push('.');
        }
        r.sql.push_str(&self.name);
    }
}

impl Render for FunctionCall {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        r.sql.push('(');
        if self.wildcard {
            r.sql.push('*');
        } else {
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                arg.render(r);
            }
        }
        r.sql.push(')');
    }
}

impl Render for Condition {
    fn render(&self, r: &mut Renderer) {
        match self {
            Condition::Compare(cmp) => cmp.render(r),
            Condition::All(list) => render_combinator(list, " AND ", r),
            Condition::Any(list) => render_combinator(list, " OR ", r),
            Condition::Not(inner) => {
                r.sql.push_str("NOT (");
                inner.render(r);
                r.sql.push(')');
            }
            Condition::IsNull { expr, negated } => {
                expr.render(r);
                r.sql
                    .push_str(if *negated { " IS NOT NULL" } else { " IS NULL" });
            }
            Condition::In { expr, set } => {
                expr.render(r);
                r.sql.push_str(" IN (");
                match set {
                    InSet::List(items) => {
                        for (i, item) in items.iter().enumerate() {
                            if i > 0 {
                                r.sql.push_str(", ");
                            }
                            item.render(r);
                        }
                    }
                    InSet::Subquery(select) => select.render(r),
                }
                r.sql.push(')');
            }
        }
    }
}

/// Joins sub-conditions with the combinator keyword, parenthesizing any
/// operand that is itself a combinator so precedence survives textually.
fn render_combinator(list: &[Condition], sep: &str, r: &mut Renderer) {
    for (i, cond) in list.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(sep);
        }
        match cond {
            Condition::All(_) | Condition::Any(_) => {
                r.sql.push('(');
                cond.render(r);
                r.sql.push(')');
            }
            _ => cond.render(r),
        }
    }
}

impl Render for Compare {
    fn render(&self, r: &mut Renderer) {
        self.left.render(r);
        let op_str = match self.op {
            CompareOp::Eq => " = ",
            CompareOp::NotEq => " <> ",
            CompareOp::Lt => " < ",
            CompareOp::LtEq => " <= ",
            CompareOp::Gt => " > ",
            CompareOp::GtEq => " >= ",
            CompareOp::Like => " LIKE ",
        };
        r.sql.push_str(op_str);
        self.right.render(r);
    }
}

impl Render for Table {
    fn render(&self, r: &mut Renderer) {
        r.sql.push_str(&self.name);
        if let Some(alias) = &self.alias {
            r.sql.push(' ');
            r.sql.push_str(alias);
        }
    }
}

impl Render for Relation {
    fn render(&self, r: &mut Renderer) {
        let join_str = match self.kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        };
        r.sql.push_str(join_str);
        r.sql.push(' ');
        self.table.render(r);
        r.sql.push_str(" ON ");
        self.on.render(r);
    }
}

impl Render for FieldAll {
    fn render(&self, r: &mut Renderer) {
        if let Some(table) = &self.table {
            r.sql.push_str(table);
            r.sql.push('.');
        }
        r.sql.push('*');
    }
}

impl Render for FieldDef {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        // A projection of a bare column under its own name needs no AS.
        if self.expr.as_plain_ident() != Some(self.alias.as_str()) {
            r.sql.push_str(" AS ");
            r.sql.push_str(&self.alias);
        }
    }
}

impl Render for OrderByItem {
    fn render(&self, r: &mut Renderer) {
        self.expr.render(r);
        if let Some(dir) = &self.dir {
            r.sql.push_str(match dir {
                OrderDir::Asc => " ASC",
                OrderDir::Desc => " DESC",
            });
        }
    }
}
