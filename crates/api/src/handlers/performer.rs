//! Handlers for the `/performers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use partier_core::types::DbId;
use partier_db::models::performer::{CreatePerformer, Performer};
use partier_db::repositories::PerformerRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireOrganizer;
use crate::state::AppState;

/// POST /api/performers
pub async fn create(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
    Json(input): Json<CreatePerformer>,
) -> AppResult<(StatusCode, Json<Performer>)> {
    let performer = PerformerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(performer)))
}

/// GET /api/events/{id}/performers
pub async fn list_by_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<Vec<Performer>>> {
    let performers = PerformerRepo::list_by_event(&state.pool, event_id).await?;
    Ok(Json(performers))
}
