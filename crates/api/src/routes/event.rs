//! Route definitions for the `/events` resource.
//!
//! Also exposes the event-scoped ticket-type and performer listings and the
//! organizer's own-events view.

use axum::routing::get;
use axum::Router;

use crate::handlers::{event, performer, ticket_type};
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create (organizer)
/// GET    /featured            -> list_featured
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update (organizer)
/// DELETE /{id}                -> delete (organizer)
/// GET    /{id}/ticket-types   -> ticket_type::list_by_event
/// GET    /{id}/performers     -> performer::list_by_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(event::list).post(event::create))
        .route("/featured", get(event::list_featured))
        .route(
            "/{id}",
            get(event::get_by_id)
                .put(event::update)
                .delete(event::delete),
        )
        .route("/{id}/ticket-types", get(ticket_type::list_by_event))
        .route("/{id}/performers", get(performer::list_by_event))
}

/// Routes mounted at `/organizer`.
///
/// ```text
/// GET /{id}/events -> list_by_organizer (organizer)
/// ```
pub fn organizer_router() -> Router<AppState> {
    Router::new().route("/{id}/events", get(event::list_by_organizer))
}
