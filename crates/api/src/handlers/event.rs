//! Handlers for the `/events` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use partier_core::error::CoreError;
use partier_core::types::DbId;
use partier_db::models::event::{CreateEvent, Event, UpdateEvent};
use partier_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOrganizer;
use crate::state::AppState;

/// GET /api/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/events/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list_featured(&state.pool).await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// POST /api/events
pub async fn create(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = EventRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;
    Ok(Json(event))
}

/// DELETE /api/events/{id}
///
/// Tickets already issued for the event are deliberately left in place.
pub async fn delete(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Event", id }))
    }
}

/// GET /api/organizer/{id}/events
pub async fn list_by_organizer(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Event>>> {
    let events = EventRepo::list_by_organizer(&state.pool, id).await?;
    Ok(Json(events))
}
