use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApolloExtError {
    #[error("Document has syntax errors: {}", .0.join("; "))]
    Syntax(Vec<String>),

    #[error("Document contains no operations")]
    NoOperation,

    #[error("Operation \"{0}\" not found")]
    OperationNotFound(String),

    #[error("Document contains {0} operations, an operation name is required")]
    AmbiguousOperation(usize),

    #[error("Field path is empty")]
    EmptyPath,

    #[error("No field selected at \"{path}\"")]
    FieldNotFound { path: String },

    #[error("Unknown fragment \"{0}\"")]
    UnknownFragment(String),
}

pub type Result<T> = std::result::Result<T, ApolloExtError>;
