#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use partier_api::auth::password::hash_password;
use partier_api::auth::session::SessionConfig;
use partier_api::config::ServerConfig;
use partier_api::routes;
use partier_api::state::AppState;
use partier_db::models::event::CreateEvent;
use partier_db::models::ticket_type::CreateTicketType;
use partier_db::models::user::{CreateUser, User};
use partier_db::repositories::{EventRepo, TicketTypeRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, COOKIE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request carrying a session cookie.
pub async fn get_auth(app: Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with the given method, optionally with a session cookie.
pub async fn send_json(
    app: Router,
    method: Method,
    path: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, path, body, None).await
}

/// Send a POST request with a JSON body and a session cookie.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send_json(app, Method::POST, path, body, Some(cookie)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Collect a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

/// Extract the `name=value` part of the session cookie from a response.
pub fn session_cookie(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("response must carry a Set-Cookie header")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie must have a name=value part")
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Password shared by all fixture users.
pub const TEST_PASSWORD: &str = "door-list-plus-one";

/// Create a user directly in the database with the given role flags.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    is_organizer: bool,
    is_super_admin: bool,
) -> User {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: hashed,
            email: format!("{username}@test.com"),
            full_name: format!("Test {username}"),
            is_organizer,
            is_super_admin,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Log a fixture user in via the API and return its session cookie.
pub async fn login(app: Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    session_cookie(&response)
}

/// Create an event owned by `organizer_id` directly in the database.
pub async fn create_event(pool: &PgPool, organizer_id: i64) -> partier_db::models::event::Event {
    EventRepo::create(
        pool,
        &CreateEvent {
            title: "Neon Nights".to_string(),
            description: "Warehouse rave with three rooms".to_string(),
            image_url: "https://img.test/neon.jpg".to_string(),
            date: chrono::Utc::now() + chrono::Duration::days(30),
            location: "The Depot".to_string(),
            address: "1 Quay Street".to_string(),
            organized_by_id: organizer_id,
            featured: false,
            tags: vec!["techno".to_string(), "late".to_string()],
        },
    )
    .await
    .expect("event creation should succeed")
}

/// Create a ticket type for an event directly in the database.
pub async fn create_ticket_type(
    pool: &PgPool,
    event_id: i64,
    price: &str,
    available: i32,
) -> partier_db::models::ticket_type::TicketType {
    TicketTypeRepo::create(
        pool,
        &CreateTicketType {
            event_id,
            name: "General Admission".to_string(),
            description: "Entry after 11pm".to_string(),
            price: price.parse().expect("valid decimal price"),
            available,
        },
    )
    .await
    .expect("ticket type creation should succeed")
}
