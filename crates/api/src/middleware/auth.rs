//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use partier_core::error::CoreError;
use partier_core::types::DbId;
use partier_db::models::user::User;
use partier_db::repositories::SessionRepo;

use crate::auth::session::{hash_session_token, token_from_cookie_header};
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_organizer: bool,
    pub is_super_admin: bool,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            is_organizer: user.is_organizer,
            is_super_admin: user.is_super_admin,
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(token_from_cookie_header)
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Not logged in".into())))?;

        let user = SessionRepo::find_user_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(CurrentUser::from(user))
    }
}
