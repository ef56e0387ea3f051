//! Ticket type entity model and DTOs.

use partier_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A ticket type row from the `ticket_types` table.
///
/// `available` is the live inventory counter; it is only ever decremented
/// through [`crate::repositories::TicketTypeRepo::reserve`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TicketType {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new ticket type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicketType {
    pub event_id: DbId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: i32,
}

/// DTO for updating an existing ticket type. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTicketType {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub available: Option<i32>,
}
