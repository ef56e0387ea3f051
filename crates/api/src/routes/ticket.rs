//! Route definitions for the `/tickets` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ticket;
use crate::state::AppState;

/// Routes mounted at `/tickets`.
///
/// ```text
/// POST /                              -> purchase (requires session)
/// GET  /all                           -> list_all (organizer)
/// GET  /user/{user_id}                -> list_by_user (own, or organizer)
/// GET  /reference/{reference}         -> get_by_reference
/// GET  /reference/{reference}/details -> get_confirmation
/// GET  /{id}                          -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(ticket::purchase))
        .route("/all", get(ticket::list_all))
        .route("/user/{user_id}", get(ticket::list_by_user))
        .route("/reference/{reference}", get(ticket::get_by_reference))
        .route(
            "/reference/{reference}/details",
            get(ticket::get_confirmation),
        )
        .route("/{id}", get(ticket::get_by_id))
}
