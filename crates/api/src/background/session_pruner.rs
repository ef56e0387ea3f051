//! Periodic cleanup of expired and revoked sessions.
//!
//! Spawns a background task that deletes dead rows from `sessions`. Runs on
//! a fixed interval using `tokio::time::interval` until cancelled.

use std::time::Duration;

use partier_db::repositories::SessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// How often the cleanup job runs.
const PRUNE_INTERVAL: Duration = Duration::from_secs(3600); // 1 hour

/// Run the session pruning loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = PRUNE_INTERVAL.as_secs(),
        "Session pruning job started"
    );

    let mut interval = tokio::time::interval(PRUNE_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session pruning job stopping");
                break;
            }
            _ = interval.tick() => {
                match SessionRepo::cleanup_expired(&pool).await {
                    Ok(deleted) => {
                        if deleted > 0 {
                            tracing::info!(deleted, "Session pruning: purged dead sessions");
                        } else {
                            tracing::debug!("Session pruning: nothing to purge");
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Session pruning: cleanup failed");
                    }
                }
            }
        }
    }
}
