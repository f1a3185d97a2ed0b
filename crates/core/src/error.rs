use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// `Forbidden` is kept distinct from `NotFound` even though the HTTP layer
/// reports booking-authorization failures as 404 -- the conflation is a
/// presentation rule, not a domain one.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
