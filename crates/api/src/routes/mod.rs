pub mod auth;
pub mod event;
pub mod export;
pub mod health;
pub mod performer;
pub mod ticket;
pub mod ticket_type;
pub mod user;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                                 register (public, auto-login)
/// /login                                    login (public)
/// /logout                                   logout (requires session)
/// /user                                     current user (requires session)
///
/// /events                                   list, create (organizer)
/// /events/featured                          featured listing
/// /events/{id}                              get, update, delete (organizer)
/// /events/{id}/ticket-types                 ticket types for an event
/// /events/{id}/performers                   lineup for an event
/// /organizer/{id}/events                    an organizer's events
///
/// /ticket-types                             create (organizer)
/// /ticket-types/{id}                        get, update (organizer)
/// /performers                               create (organizer)
///
/// /tickets                                  purchase (requires session)
/// /tickets/all                              every ticket (organizer)
/// /tickets/user/{user_id}                   a user's tickets
/// /tickets/reference/{reference}            lookup by reference
/// /tickets/reference/{reference}/details    confirmation assembly
/// /tickets/{id}                             lookup by id
///
/// /scan                                     QR scan validation (POST)
///
/// /users                                    list (super admin)
/// /users/{id}                               patch (super admin)
/// /users/{id}/organizer-status              toggle organizer (super admin)
/// /organizers                               create organizer (super admin)
///
/// /export/users                             users CSV (organizer)
/// /export/tickets                           ticket sales CSV (organizer)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Session authentication (flat, matching the frontend's /api/login etc.).
        .merge(auth::router())
        // Event catalog and management.
        .nest("/events", event::router())
        .nest("/organizer", event::organizer_router())
        // Ticket types and performers.
        .nest("/ticket-types", ticket_type::router())
        .nest("/performers", performer::router())
        // Ticket issuance and lookups.
        .nest("/tickets", ticket::router())
        // QR scan validation.
        .route("/scan", post(handlers::scan::validate_scan))
        // User administration.
        .nest("/users", user::router())
        .route("/organizers", post(handlers::user::create_organizer))
        // CSV exports.
        .nest("/export", export::router())
}
