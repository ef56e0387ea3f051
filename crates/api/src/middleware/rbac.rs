//! Role-based access control extractors.
//!
//! Each extractor wraps [`CurrentUser`] and rejects requests whose role does
//! not meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use partier_core::error::CoreError;

use super::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires any authenticated user.
///
/// Functionally equivalent to [`CurrentUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
pub struct RequireAuth(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}

/// Requires the organizer flag (super admins qualify). Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn organizer_only(RequireOrganizer(user): RequireOrganizer) -> AppResult<Json<()>> {
///     // user is guaranteed to be an organizer here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOrganizer(pub CurrentUser);

impl FromRequestParts<AppState> for RequireOrganizer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_organizer && !user.is_super_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Requires organizer role".into(),
            )));
        }
        Ok(RequireOrganizer(user))
    }
}

/// Requires the super-admin flag. Rejects with 403 Forbidden otherwise.
pub struct RequireSuperAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_super_admin {
            return Err(AppError::Core(CoreError::Forbidden(
                "Requires super admin role".into(),
            )));
        }
        Ok(RequireSuperAdmin(user))
    }
}
