//! Route definitions for user administration (super-admin only).

use axum::routing::{get, patch, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET   /                       -> list_users (super admin)
/// PATCH /{id}                   -> patch_user (super admin)
/// PUT   /{id}/organizer-status  -> set_organizer_status (super admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_users))
        .route("/{id}", patch(user::patch_user))
        .route("/{id}/organizer-status", put(user::set_organizer_status))
}
