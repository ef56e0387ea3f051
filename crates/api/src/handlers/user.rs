//! Handlers for user administration (super-admin only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use partier_core::error::CoreError;
use partier_core::types::DbId;
use partier_db::models::user::{CreateUser, UpdateUser, UserResponse};
use partier_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperAdmin;
use crate::state::AppState;

/// Minimum password length enforced on organizer creation.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/organizers`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrganizerRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    pub password: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "full name must not be empty"))]
    pub full_name: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// POST /api/organizers
///
/// Create a user with the organizer flag forced on.
pub async fn create_organizer(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
    Json(input): Json<CreateOrganizerRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
            email: input.email,
            full_name: input.full_name,
            is_organizer: true,
            is_super_admin: false,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PATCH /api/users/{id}
pub async fn patch_user(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/users/{id}/organizer-status
///
/// Body must be `{ "is_organizer": <bool> }`; anything else is a 400,
/// matching the explicit type check the admin panel depends on.
pub async fn set_organizer_status(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<UserResponse>> {
    let is_organizer = body
        .get("is_organizer")
        .and_then(serde_json::Value::as_bool)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "is_organizer must be a boolean value".into(),
            ))
        })?;

    let user = UserRepo::set_organizer_status(&state.pool, id, is_organizer)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(&user)))
}
