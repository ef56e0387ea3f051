//! HTTP-level integration tests for QR scan validation.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth};
use sqlx::PgPool;

async fn issue_ticket(pool: &PgPool, username: &str) -> serde_json::Value {
    let buyer = common::create_user(pool, username, false, false).await;
    let event = common::create_event(pool, buyer.id).await;
    let ticket_type = common::create_ticket_type(pool, event.id, "45.00", 10).await;
    let cookie = common::login(common::build_test_app(pool.clone()), username).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/tickets",
        serde_json::json!({
            "user_id": buyer.id,
            "event_id": event.id,
            "ticket_type_id": ticket_type.id,
            "quantity": 1,
            "total_price": "52.65",
            "payment_details": { "method": "PayPal", "status": "completed" }
        }),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Scanning an issued ticket's reference is invalid under the current expiry
/// rule: the purchase instant is already in the past by the time it is
/// scanned. This pins the shipped comparison (purchase date, not event date).
#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_of_fresh_ticket_reads_expired(pool: PgPool) {
    let issued = issue_ticket(&pool, "doorcheck").await;
    let reference = issued["reference_number"].as_str().unwrap();

    let response = post_json(
        common::build_test_app(pool),
        "/api/scan",
        serde_json::json!({ "code": reference }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["valid"], false);
    assert_eq!(json["message"], "Ticket has expired");
}

/// A ticket whose purchase timestamp is still in the future scans as valid
/// and exposes the fields the door display shows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_of_unexpired_ticket_is_valid(pool: PgPool) {
    let issued = issue_ticket(&pool, "earlybird").await;
    let reference = issued["reference_number"].as_str().unwrap();
    let id = issued["id"].as_i64().unwrap();

    // Push the purchase timestamp into the future to satisfy the expiry
    // comparison.
    sqlx::query("UPDATE tickets SET purchase_date = NOW() + INTERVAL '1 hour' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .expect("timestamp update should succeed");

    let response = post_json(
        common::build_test_app(pool),
        "/api/scan",
        serde_json::json!({ "code": reference }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["valid"], true);
    assert_eq!(json["message"], "Valid ticket");
    assert_eq!(json["ticket"]["reference_number"], reference);
    assert_eq!(json["ticket"]["quantity"], 1);
    assert!(json["ticket"]["purchase_date"].is_string());
}

/// An unrecognized but well-formed code is invalid, with a 200 status.
#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_of_unknown_reference_is_invalid(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/scan",
        serde_json::json!({ "code": "TIX00000" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["valid"], false);
    assert_eq!(json["message"], "Ticket not found");
    assert!(json.get("ticket").is_none());
}

/// Garbage payloads (wrong shape entirely) degrade to the same invalid
/// outcome without touching the database.
#[sqlx::test(migrations = "../../db/migrations")]
async fn scan_of_malformed_code_is_invalid(pool: PgPool) {
    for code in ["", "hello", "TIX123", "https://evil.test/qr"] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/scan",
            serde_json::json!({ "code": code }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["valid"], false, "code {code:?} must be invalid");
        assert_eq!(json["message"], "Ticket not found");
    }
}
