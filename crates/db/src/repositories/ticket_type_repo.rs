//! Repository for the `ticket_types` table.

use partier_core::types::DbId;
use sqlx::{PgPool, Postgres};

use crate::models::ticket_type::{CreateTicketType, TicketType, UpdateTicketType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, event_id, name, description, price, available, created_at, updated_at";

/// Provides CRUD operations for ticket types, including the inventory
/// reservation used by ticket issuance.
pub struct TicketTypeRepo;

impl TicketTypeRepo {
    /// Insert a new ticket type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTicketType,
    ) -> Result<TicketType, sqlx::Error> {
        let query = format!(
            "INSERT INTO ticket_types (event_id, name, description, price, available)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketType>(&query)
            .bind(input.event_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.available)
            .fetch_one(pool)
            .await
    }

    /// Find a ticket type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TicketType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ticket_types WHERE id = $1");
        sqlx::query_as::<_, TicketType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the ticket types offered for an event, cheapest first.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<TicketType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM ticket_types WHERE event_id = $1 ORDER BY price");
        sqlx::query_as::<_, TicketType>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a ticket type. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTicketType,
    ) -> Result<Option<TicketType>, sqlx::Error> {
        let query = format!(
            "UPDATE ticket_types SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                available = COALESCE($5, available),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }

    /// Atomically reserve `quantity` units of inventory.
    ///
    /// Returns `true` when the decrement applied; `false` means the ticket
    /// type does not exist or has fewer than `quantity` units left. Runs on
    /// any executor so issuance can call it inside its transaction.
    pub async fn reserve<'e, E>(executor: E, id: DbId, quantity: i32) -> Result<bool, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query(
            "UPDATE ticket_types
             SET available = available - $2, updated_at = NOW()
             WHERE id = $1 AND available >= $2",
        )
        .bind(id)
        .bind(quantity)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
