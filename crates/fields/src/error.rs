use std::sync::Arc;
use thiserror::Error;

/// Errors raised while collecting requested fields.
///
/// Malformed selections are absorbed rather than reported. Only an
/// inconsistent fragment table surfaces as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldsError {
    #[error("Unknown fragment \"{name}\"")]
    UnknownFragment { name: Arc<str> },

    #[error("Cannot spread fragment \"{name}\" within itself (via {})", .path.join(" -> "))]
    CyclicFragment { name: Arc<str>, path: Vec<Arc<str>> },
}

pub type Result<T> = std::result::Result<T, FieldsError>;
