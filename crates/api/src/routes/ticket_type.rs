//! Route definitions for the `/ticket-types` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ticket_type;
use crate::state::AppState;

/// Routes mounted at `/ticket-types`.
///
/// ```text
/// POST /      -> create (organizer)
/// GET  /{id}  -> get_by_id
/// PUT  /{id}  -> update (organizer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(ticket_type::create))
        .route(
            "/{id}",
            get(ticket_type::get_by_id).put(ticket_type::update),
        )
}
