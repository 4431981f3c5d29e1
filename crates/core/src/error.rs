use crate::types::DbId;

/// Domain failures shared by the booking rules and the HTTP layer.
///
/// `Validation` covers seat bounds, schedule and field checks; `Conflict`
/// covers seats already held by another ticket.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A flight, airport, route or other referenced row does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Stored data contradicts an invariant, e.g. more tickets than seats.
    #[error("Internal error: {0}")]
    Internal(String),
}
