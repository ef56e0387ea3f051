//! Handlers for the `/ticket-types` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use partier_core::error::CoreError;
use partier_core::types::DbId;
use partier_db::models::ticket_type::{CreateTicketType, TicketType, UpdateTicketType};
use partier_db::repositories::TicketTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOrganizer;
use crate::state::AppState;

/// POST /api/ticket-types
pub async fn create(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Json(input): Json<CreateTicketType>,
) -> AppResult<(StatusCode, Json<TicketType>)> {
    if input.price.is_sign_negative() {
        return Err(AppError::Core(CoreError::Validation(
            "price must not be negative".into(),
        )));
    }
    if input.available < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "available must not be negative".into(),
        )));
    }
    let ticket_type = TicketTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(ticket_type)))
}

/// GET /api/ticket-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TicketType>> {
    let ticket_type = TicketTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TicketType",
            id,
        }))?;
    Ok(Json(ticket_type))
}

/// PUT /api/ticket-types/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTicketType>,
) -> AppResult<Json<TicketType>> {
    let ticket_type = TicketTypeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TicketType",
            id,
        }))?;
    Ok(Json(ticket_type))
}

/// GET /api/events/{id}/ticket-types
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<Vec<TicketType>>> {
    let ticket_types = TicketTypeRepo::list_by_event(&state.pool, event_id).await?;
    Ok(Json(ticket_types))
}
