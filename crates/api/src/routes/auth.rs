//! Route definitions for session authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Flat auth routes mounted directly under `/api`.
///
/// ```text
/// POST /register  -> register (public, auto-login)
/// POST /login     -> login (public)
/// POST /logout    -> logout (requires session)
/// GET  /user      -> current_user (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}
