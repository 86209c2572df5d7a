//! Constructor macros for the common leaf nodes.

#[macro_export]
macro_rules! raw_sql {
    ($fragment:expr) => {
        $crate::ast::expr::Expr::Raw($fragment.to_string())
    };
}

#[macro_export]
macro_rules! table {
    ($name:expr) => {
        $crate::ast::common::Table {
            name: $name.to_string(),
            alias: None,
        }
    };
    ($name:expr, $alias:expr) => {
        $crate::ast::common::Table {
            name: $name.to_string(),
            alias: Some($alias.to_string()),
        }
    };
}

#[macro_export]
macro_rules! col {
    ($name:expr) => {
        $crate::ast::expr::Expr::Identifier($crate::ast::expr::Ident {
            qualifier: None,
            name: $name.to_string(),
        })
    };
    ($qualifier:expr, $name:expr) => {
        $crate::ast::expr::Expr::Identifier($crate::ast::expr::Ident {
            qualifier: Some($qualifier.to_string()),
            name: $name.to_string(),
        })
    };
}

#[cfg(test)]
mod tests {
    use crate::{ident, qualified};

    #[test]
    fn macros_match_helper_constructors() {
        assert_eq!(col!("status"), ident("status"));
        assert_eq!(col!("o", "status"), qualified("o", "status"));
        assert_eq!(table!("orders", "o").alias.as_deref(), Some("o"));
        assert_eq!(raw_sql!("'OPEN'"), crate::raw("'OPEN'"));
    }
}
