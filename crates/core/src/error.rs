use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// `Validation` covers malformed or constraint-violating input and maps to
/// a 400-class response; `NotFound` maps to 404; everything else is a
/// server-side failure. No variant is ever retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
