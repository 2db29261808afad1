use ladle_core::types::DbId;

/// Errors surfaced by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An update targeted a row that no longer exists.
    #[error("Row not found: {entity} with id {id}")]
    Missing { entity: &'static str, id: DbId },

    /// A stored value could not be interpreted (e.g. an unknown scope
    /// name). Indicates out-of-band writes or a migration gap.
    #[error("Corrupt row: {0}")]
    Corrupt(String),
}
