use thiserror::Error;

/// Errors surfaced while constructing a statement or dispatching a visitor.
///
/// Construction errors are reported at build time, never deferred to render
/// time; a successfully built node is always renderable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    #[error("visitor has no handler for {0} statements")]
    UnsupportedStatement(&'static str),

    #[error("INSERT requires at least one target column")]
    EmptyColumns,

    #[error("INSERT requires a VALUES list or a query source")]
    MissingSource,

    #[error("row has {found} values but {expected} columns are listed")]
    RowArity { expected: usize, found: usize },

    #[error("UPDATE requires at least one SET assignment")]
    EmptyAssignments,
}
