//! Ticket entity model and DTOs.
//!
//! Tickets are immutable once issued: there is no update DTO and no update
//! path through the repository.

use partier_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// An issued ticket row from the `tickets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Ticket {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub ticket_type_id: DbId,
    pub quantity: i32,
    pub total_price: Decimal,
    pub purchase_date: Timestamp,
    pub reference_number: String,
    pub payment_details: serde_json::Value,
}

/// DTO for issuing a ticket. The reference number is allocated by
/// [`crate::repositories::TicketRepo::issue`], not supplied here.
#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub user_id: DbId,
    pub event_id: DbId,
    pub ticket_type_id: DbId,
    pub quantity: i32,
    pub total_price: Decimal,
    pub payment_details: serde_json::Value,
}

/// A row of the ticket-sales export: ticket fields joined with the names a
/// report reader actually wants.
#[derive(Debug, Clone, FromRow)]
pub struct TicketExportRow {
    pub id: DbId,
    pub reference_number: String,
    pub user_id: DbId,
    pub user_name: Option<String>,
    pub event_id: DbId,
    pub event_title: Option<String>,
    pub ticket_type_id: DbId,
    pub ticket_type_name: Option<String>,
    pub ticket_type_price: Option<Decimal>,
    pub purchase_date: Timestamp,
}
