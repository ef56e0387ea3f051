//! Route definitions for CSV exports.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`.
///
/// ```text
/// GET /users   -> export_users (organizer)
/// GET /tickets -> export_tickets (organizer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(export::export_users))
        .route("/tickets", get(export::export_tickets))
}
