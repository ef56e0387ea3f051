//! Handlers for the `/tickets` resource: issuance, lookup, and the
//! confirmation assembly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use partier_core::error::CoreError;
use partier_core::pricing;
use partier_core::types::DbId;
use partier_db::models::event::Event;
use partier_db::models::ticket::{CreateTicket, Ticket};
use partier_db::models::ticket_type::TicketType;
use partier_db::repositories::{EventRepo, TicketRepo, TicketTypeRepo};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::middleware::rbac::RequireOrganizer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/tickets`.
///
/// `total_price` is what the client's checkout computed; the handler
/// recomputes the breakdown from the ticket type's price and rejects a
/// disagreement rather than trusting the wire value.
#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseTicketRequest {
    pub user_id: DbId,
    pub event_id: DbId,
    pub ticket_type_id: DbId,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: i32,
    pub total_price: Decimal,
    /// Opaque payment blob (method, subtotal, fee, tax, status) persisted
    /// with the ticket for later display.
    pub payment_details: serde_json::Value,
}

/// Composite view for the confirmation screen: the ticket joined with its
/// event and ticket type.
#[derive(Debug, Serialize)]
pub struct TicketConfirmation {
    pub ticket: Ticket,
    pub event: Event,
    pub ticket_type: TicketType,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/tickets
///
/// Issue a ticket for the authenticated user. Verifies that the referenced
/// event and ticket type exist and belong together, recomputes the price
/// breakdown, then runs the reserve-and-insert transaction.
pub async fn purchase(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(input): Json<PurchaseTicketRequest>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    input.validate()?;

    if input.user_id != user.id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot purchase tickets for another user".into(),
        )));
    }

    let event = EventRepo::find_by_id(&state.pool, input.event_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "event {} does not exist",
                input.event_id
            )))
        })?;

    let ticket_type = TicketTypeRepo::find_by_id(&state.pool, input.ticket_type_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "ticket type {} does not exist",
                input.ticket_type_id
            )))
        })?;

    if ticket_type.event_id != event.id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "ticket type {} does not belong to event {}",
            ticket_type.id, event.id
        ))));
    }

    let subtotal = ticket_type.price * Decimal::from(input.quantity);
    let breakdown = pricing::order_total(subtotal);
    if input.total_price != breakdown.total {
        return Err(AppError::Core(CoreError::Validation(format!(
            "total price mismatch: expected {}, got {}",
            breakdown.total, input.total_price
        ))));
    }

    let ticket = TicketRepo::issue(
        &state.pool,
        &CreateTicket {
            user_id: input.user_id,
            event_id: input.event_id,
            ticket_type_id: input.ticket_type_id,
            quantity: input.quantity,
            total_price: breakdown.total,
            payment_details: input.payment_details,
        },
    )
    .await?;

    tracing::info!(
        ticket_id = ticket.id,
        reference = %ticket.reference_number,
        user_id = user.id,
        "Ticket issued"
    );

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// GET /api/tickets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Ticket>> {
    let ticket = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Ticket",
            id,
        }))?;
    Ok(Json(ticket))
}

/// GET /api/tickets/reference/{reference}
pub async fn get_by_reference(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<Json<Ticket>> {
    let ticket = TicketRepo::find_by_reference(&state.pool, &reference)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".into()))?;
    Ok(Json(ticket))
}

/// GET /api/tickets/reference/{reference}/details
///
/// Assemble the confirmation view. The three reads are independent; if the
/// ticket, its event, or its ticket type is missing, the whole lookup is a
/// not-found rather than a partially populated view.
pub async fn get_confirmation(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<Json<TicketConfirmation>> {
    let not_found = || AppError::NotFound("Ticket not found".into());

    let ticket = TicketRepo::find_by_reference(&state.pool, &reference)
        .await?
        .ok_or_else(not_found)?;
    let event = EventRepo::find_by_id(&state.pool, ticket.event_id)
        .await?
        .ok_or_else(not_found)?;
    let ticket_type = TicketTypeRepo::find_by_id(&state.pool, ticket.ticket_type_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(TicketConfirmation {
        ticket,
        event,
        ticket_type,
    }))
}

/// GET /api/tickets/user/{user_id}
///
/// A user's purchase history: their own, or anyone's for an organizer.
pub async fn list_by_user(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Ticket>>> {
    if user.id != user_id && !user.is_organizer && !user.is_super_admin {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot read another user's tickets".into(),
        )));
    }
    let tickets = TicketRepo::list_by_user(&state.pool, user_id).await?;
    Ok(Json(tickets))
}

/// GET /api/tickets/all
pub async fn list_all(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
) -> AppResult<Json<Vec<Ticket>>> {
    let tickets = TicketRepo::list_all(&state.pool).await?;
    Ok(Json(tickets))
}
