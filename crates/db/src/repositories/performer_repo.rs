//! Repository for the `performers` table.

use partier_core::types::DbId;
use sqlx::PgPool;

use crate::models::performer::{CreatePerformer, Performer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, event_id, name, image_url, time, is_headliner, created_at, updated_at";

/// Provides operations for performers.
pub struct PerformerRepo;

impl PerformerRepo {
    /// Insert a new performer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerformer) -> Result<Performer, sqlx::Error> {
        let query = format!(
            "INSERT INTO performers (event_id, name, image_url, time, is_headliner)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Performer>(&query)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.image_url)
            .bind(&input.time)
            .bind(input.is_headliner)
            .fetch_one(pool)
            .await
    }

    /// List an event's lineup: headliners first, then by name.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Performer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM performers WHERE event_id = $1
             ORDER BY is_headliner DESC, name"
        );
        sqlx::query_as::<_, Performer>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
