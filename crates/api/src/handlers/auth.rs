//! Handlers for session authentication (register, login, logout, whoami).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderName, StatusCode};
use axum::Json;
use chrono::Utc;
use partier_core::error::CoreError;
use partier_db::models::session::CreateSession;
use partier_db::models::user::{CreateUser, User, UserResponse};
use partier_db::repositories::{SessionRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

/// Minimum password length enforced on registration.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters"))]
    pub username: String,
    pub password: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "full name must not be empty"))]
    pub full_name: String,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create an account and log it in immediately: the response carries the
/// session cookie alongside the safe user body.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<UserResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest("Username already exists".into()));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            password_hash,
            email: input.email,
            full_name: input.full_name,
            is_organizer: false,
            is_super_admin: false,
        },
    )
    .await?;

    let cookie = open_session(&state, &user).await?;
    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(UserResponse::from(&user)),
    ))
}

/// POST /api/login
///
/// Authenticate with username + password. Unknown usernames and wrong
/// passwords are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<([(HeaderName, String); 1], Json<UserResponse>)> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    let cookie = open_session(&state, &user).await?;
    Ok(([(SET_COOKIE, cookie)], Json(UserResponse::from(&user))))
}

/// POST /api/logout
///
/// Revoke the caller's sessions and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<([(HeaderName, String); 1], StatusCode)> {
    SessionRepo::revoke_all_for_user(&state.pool, user.id).await?;
    let cookie = clear_session_cookie(&state.config.session);
    Ok(([(SET_COOKIE, cookie)], StatusCode::OK))
}

/// GET /api/user
///
/// The authenticated user's safe profile, or 401 without a session.
pub async fn current_user(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        full_name: user.full_name,
        is_organizer: user.is_organizer,
        is_super_admin: user.is_super_admin,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a fresh session for `user` and build its `Set-Cookie` value.
async fn open_session(state: &AppState, user: &User) -> AppResult<String> {
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(state.config.session.expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at,
            user_agent: None,
        },
    )
    .await?;

    Ok(session_cookie(&token, &state.config.session))
}
