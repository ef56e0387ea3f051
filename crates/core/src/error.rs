use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
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

    /// Inventory could not cover the requested quantity.
    #[error("Ticket type {ticket_type_id} cannot cover {requested} ticket(s)")]
    SoldOut { ticket_type_id: DbId, requested: i32 },

    /// Reference-number allocation kept colliding with existing tickets.
    #[error("Could not allocate a ticket reference after {attempts} attempts")]
    ReferenceExhausted { attempts: u32 },

    #[error("Internal error: {0}")]
    Internal(String),
}
