//! Route definitions for the `/performers` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::performer;
use crate::state::AppState;

/// Routes mounted at `/performers`.
///
/// ```text
/// POST / -> create (organizer)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(performer::create))
}
