//! Repository-level tests for session lookup, revocation, and pruning.

use chrono::{Duration, Utc};
use partier_db::models::session::CreateSession;
use partier_db::models::user::CreateUser;
use partier_db::repositories::{SessionRepo, UserRepo};
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            email: format!("{username}@test.com"),
            full_name: username.to_string(),
            is_organizer: false,
            is_super_admin: false,
        },
    )
    .await
    .expect("user")
    .id
}

fn session(user_id: i64, token_hash: &str, expires_in: Duration) -> CreateSession {
    CreateSession {
        user_id,
        token_hash: token_hash.to_string(),
        expires_at: Utc::now() + expires_in,
        user_agent: None,
    }
}

/// An active session resolves to its user in one lookup.
#[sqlx::test(migrations = "../../db/migrations")]
async fn active_session_resolves_user(pool: PgPool) {
    let user_id = seed_user(&pool, "clubber").await;
    SessionRepo::create(&pool, &session(user_id, "hash-a", Duration::days(7)))
        .await
        .expect("session");

    let user = SessionRepo::find_user_by_token_hash(&pool, "hash-a")
        .await
        .expect("lookup")
        .expect("session resolves");
    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "clubber");
}

/// Expired sessions never resolve.
#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_session_does_not_resolve(pool: PgPool) {
    let user_id = seed_user(&pool, "latecomer").await;
    SessionRepo::create(&pool, &session(user_id, "hash-b", Duration::seconds(-1)))
        .await
        .expect("session");

    let user = SessionRepo::find_user_by_token_hash(&pool, "hash-b")
        .await
        .expect("lookup");
    assert!(user.is_none(), "expired session must not authenticate");
}

/// Revocation kills every session the user holds.
#[sqlx::test(migrations = "../../db/migrations")]
async fn revocation_covers_all_sessions(pool: PgPool) {
    let user_id = seed_user(&pool, "multidevice").await;
    SessionRepo::create(&pool, &session(user_id, "hash-phone", Duration::days(7)))
        .await
        .expect("session");
    SessionRepo::create(&pool, &session(user_id, "hash-laptop", Duration::days(7)))
        .await
        .expect("session");

    let revoked = SessionRepo::revoke_all_for_user(&pool, user_id)
        .await
        .expect("revoke");
    assert_eq!(revoked, 2);

    for hash in ["hash-phone", "hash-laptop"] {
        let user = SessionRepo::find_user_by_token_hash(&pool, hash)
            .await
            .expect("lookup");
        assert!(user.is_none(), "revoked session {hash} must not resolve");
    }
}

/// Cleanup removes only dead sessions.
#[sqlx::test(migrations = "../../db/migrations")]
async fn cleanup_removes_only_dead_sessions(pool: PgPool) {
    let user_id = seed_user(&pool, "pruned").await;
    SessionRepo::create(&pool, &session(user_id, "hash-live", Duration::days(7)))
        .await
        .expect("session");
    SessionRepo::create(&pool, &session(user_id, "hash-dead", Duration::seconds(-1)))
        .await
        .expect("session");

    let deleted = SessionRepo::cleanup_expired(&pool).await.expect("cleanup");
    assert_eq!(deleted, 1);

    let user = SessionRepo::find_user_by_token_hash(&pool, "hash-live")
        .await
        .expect("lookup");
    assert!(user.is_some(), "live session must survive pruning");
}
