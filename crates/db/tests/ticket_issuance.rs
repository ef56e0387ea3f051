//! Repository-level tests for the issuance transaction and its invariants.

use partier_core::error::CoreError;
use partier_db::models::event::CreateEvent;
use partier_db::models::ticket::CreateTicket;
use partier_db::models::ticket_type::CreateTicketType;
use partier_db::models::user::CreateUser;
use partier_db::repositories::{EventRepo, TicketRepo, TicketTypeRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

async fn seed(pool: &PgPool, available: i32) -> (i64, i64, i64) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: "buyer".to_string(),
            password_hash: "$argon2id$fake".to_string(),
            email: "buyer@test.com".to_string(),
            full_name: "Buyer".to_string(),
            is_organizer: false,
            is_super_admin: false,
        },
    )
    .await
    .expect("user");

    let event = EventRepo::create(
        pool,
        &CreateEvent {
            title: "Open Decks".to_string(),
            description: "Bring a USB stick".to_string(),
            image_url: "https://img.test/decks.jpg".to_string(),
            date: chrono::Utc::now() + chrono::Duration::days(7),
            location: "Basement Bar".to_string(),
            address: "9 Side Street".to_string(),
            organized_by_id: user.id,
            featured: false,
            tags: vec![],
        },
    )
    .await
    .expect("event");

    let ticket_type = TicketTypeRepo::create(
        pool,
        &CreateTicketType {
            event_id: event.id,
            name: "Early Entry".to_string(),
            description: "Before midnight".to_string(),
            price: "20.00".parse().unwrap(),
            available,
        },
    )
    .await
    .expect("ticket type");

    (user.id, event.id, ticket_type.id)
}

fn purchase(user_id: i64, event_id: i64, ticket_type_id: i64, quantity: i32) -> CreateTicket {
    CreateTicket {
        user_id,
        event_id,
        ticket_type_id,
        quantity,
        total_price: "23.40".parse().unwrap(),
        payment_details: serde_json::json!({ "method": "Credit Card", "status": "completed" }),
    }
}

// ---------------------------------------------------------------------------
// Issuance
// ---------------------------------------------------------------------------

/// Issuing assigns a well-formed reference and decrements inventory by the
/// purchased quantity.
#[sqlx::test(migrations = "../../db/migrations")]
async fn issue_assigns_reference_and_decrements(pool: PgPool) {
    let (user_id, event_id, ticket_type_id) = seed(&pool, 10).await;

    let ticket = TicketRepo::issue(&pool, &purchase(user_id, event_id, ticket_type_id, 3))
        .await
        .expect("issuance should succeed");

    assert!(partier_core::reference::is_reference(
        &ticket.reference_number
    ));
    assert_eq!(ticket.quantity, 3);

    let ticket_type = TicketTypeRepo::find_by_id(&pool, ticket_type_id)
        .await
        .expect("lookup")
        .expect("ticket type exists");
    assert_eq!(ticket_type.available, 7);

    // The issued row is retrievable by its reference.
    let found = TicketRepo::find_by_reference(&pool, &ticket.reference_number)
        .await
        .expect("lookup")
        .expect("ticket exists");
    assert_eq!(found.id, ticket.id);
    assert_eq!(found.user_id, user_id);
}

/// Oversubscribing is refused and leaves both the counter and the ticket
/// table untouched.
#[sqlx::test(migrations = "../../db/migrations")]
async fn issue_refuses_oversubscription(pool: PgPool) {
    let (user_id, event_id, ticket_type_id) = seed(&pool, 1).await;

    let err = TicketRepo::issue(&pool, &purchase(user_id, event_id, ticket_type_id, 2))
        .await
        .expect_err("issuance must fail");
    assert!(
        matches!(err, CoreError::SoldOut { requested: 2, .. }),
        "expected SoldOut, got {err:?}"
    );

    let ticket_type = TicketTypeRepo::find_by_id(&pool, ticket_type_id)
        .await
        .expect("lookup")
        .expect("ticket type exists");
    assert_eq!(ticket_type.available, 1, "failed issuance must not reserve");

    let tickets = TicketRepo::list_all(&pool).await.expect("list");
    assert!(tickets.is_empty(), "failed issuance must not insert");
}

/// Draining inventory exactly to zero works; the next request is refused.
#[sqlx::test(migrations = "../../db/migrations")]
async fn issue_sells_the_last_unit_once(pool: PgPool) {
    let (user_id, event_id, ticket_type_id) = seed(&pool, 1).await;

    TicketRepo::issue(&pool, &purchase(user_id, event_id, ticket_type_id, 1))
        .await
        .expect("first purchase succeeds");

    let err = TicketRepo::issue(&pool, &purchase(user_id, event_id, ticket_type_id, 1))
        .await
        .expect_err("second purchase must fail");
    assert!(matches!(err, CoreError::SoldOut { .. }));

    let ticket_type = TicketTypeRepo::find_by_id(&pool, ticket_type_id)
        .await
        .expect("lookup")
        .expect("ticket type exists");
    assert_eq!(ticket_type.available, 0, "inventory must never go negative");
}

/// A missing ticket type reads as sold out (nothing to reserve).
#[sqlx::test(migrations = "../../db/migrations")]
async fn issue_against_missing_ticket_type_fails(pool: PgPool) {
    let (user_id, event_id, _) = seed(&pool, 1).await;

    let err = TicketRepo::issue(&pool, &purchase(user_id, event_id, 424242, 1))
        .await
        .expect_err("issuance must fail");
    assert!(matches!(err, CoreError::SoldOut { .. }));
}

// ---------------------------------------------------------------------------
// Reference uniqueness
// ---------------------------------------------------------------------------

/// The database, not the generator, enforces reference uniqueness: a direct
/// duplicate insert trips the named constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_reference_violates_constraint(pool: PgPool) {
    let (user_id, event_id, ticket_type_id) = seed(&pool, 10).await;

    let insert = "INSERT INTO tickets
            (user_id, event_id, ticket_type_id, quantity, total_price, reference_number, payment_details)
         VALUES ($1, $2, $3, 1, 23.40, $4, '{}')";

    sqlx::query(insert)
        .bind(user_id)
        .bind(event_id)
        .bind(ticket_type_id)
        .bind("TIX77777")
        .execute(&pool)
        .await
        .expect("first insert succeeds");

    let err = sqlx::query(insert)
        .bind(user_id)
        .bind(event_id)
        .bind(ticket_type_id)
        .bind("TIX77777")
        .execute(&pool)
        .await
        .expect_err("duplicate reference must be rejected");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_tickets_reference_number"));
        }
        other => panic!("expected a database error, got {other:?}"),
    }
}
