//! Repository for the `tickets` table, including the issuance transaction.

use partier_core::error::CoreError;
use partier_core::reference;
use partier_core::types::DbId;
use sqlx::{PgPool, Postgres};

use crate::models::ticket::{CreateTicket, Ticket, TicketExportRow};
use crate::repositories::user_repo::csv_field;
use crate::repositories::TicketTypeRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, event_id, ticket_type_id, quantity, total_price, \
                       purchase_date, reference_number, payment_details";

/// Reference generation is random, so an insert can collide with an existing
/// row. Each attempt runs in its own transaction; this bounds the retries.
const MAX_REFERENCE_ATTEMPTS: u32 = 5;

/// Provides issuance and lookup operations for tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Issue a ticket: reserve inventory and insert the row, both in one
    /// transaction.
    ///
    /// A fresh reference number is generated per attempt. When the insert
    /// trips `uq_tickets_reference_number`, the transaction is rolled back
    /// (undoing the reservation) and the whole attempt repeats with a new
    /// reference, up to [`MAX_REFERENCE_ATTEMPTS`] times.
    ///
    /// Errors:
    /// - [`CoreError::SoldOut`] when the ticket type cannot cover the
    ///   requested quantity (or does not exist).
    /// - [`CoreError::ReferenceExhausted`] when every attempt collided.
    pub async fn issue(pool: &PgPool, input: &CreateTicket) -> Result<Ticket, CoreError> {
        for attempt in 1..=MAX_REFERENCE_ATTEMPTS {
            let mut tx = pool.begin().await.map_err(internal)?;

            let reserved = TicketTypeRepo::reserve(&mut *tx, input.ticket_type_id, input.quantity)
                .await
                .map_err(internal)?;
            if !reserved {
                return Err(CoreError::SoldOut {
                    ticket_type_id: input.ticket_type_id,
                    requested: input.quantity,
                });
            }

            let reference = reference::generate_reference();
            match Self::insert(&mut *tx, input, &reference).await {
                Ok(ticket) => {
                    tx.commit().await.map_err(internal)?;
                    return Ok(ticket);
                }
                Err(err) if is_reference_collision(&err) => {
                    // Roll back the reservation and redraw.
                    tx.rollback().await.map_err(internal)?;
                    tracing::warn!(attempt, reference = %reference, "Ticket reference collided, retrying");
                }
                Err(err) => return Err(internal(err)),
            }
        }

        Err(CoreError::ReferenceExhausted {
            attempts: MAX_REFERENCE_ATTEMPTS,
        })
    }

    /// Insert a ticket row with an already-chosen reference number.
    async fn insert<'e, E>(
        executor: E,
        input: &CreateTicket,
        reference: &str,
    ) -> Result<Ticket, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = Postgres>,
    {
        let query = format!(
            "INSERT INTO tickets (user_id, event_id, ticket_type_id, quantity, total_price, reference_number, payment_details)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Ticket>(&query)
            .bind(input.user_id)
            .bind(input.event_id)
            .bind(input.ticket_type_id)
            .bind(input.quantity)
            .bind(input.total_price)
            .bind(reference)
            .bind(&input.payment_details)
            .fetch_one(executor)
            .await
    }

    /// Find a ticket by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a ticket by its reference number (exact match).
    pub async fn find_by_reference(
        pool: &PgPool,
        reference: &str,
    ) -> Result<Option<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE reference_number = $1");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(reference)
            .fetch_optional(pool)
            .await
    }

    /// List a user's tickets, most recent purchase first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Ticket>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tickets WHERE user_id = $1 ORDER BY purchase_date DESC");
        sqlx::query_as::<_, Ticket>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List every ticket, most recent purchase first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Ticket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tickets ORDER BY purchase_date DESC");
        sqlx::query_as::<_, Ticket>(&query).fetch_all(pool).await
    }

    /// Export all ticket sales as a CSV report with joined display names.
    ///
    /// Purchases referencing a deleted user/event/ticket type fall back to
    /// `Unknown ...` placeholders rather than being dropped.
    pub async fn export_csv(pool: &PgPool) -> Result<String, sqlx::Error> {
        let rows = sqlx::query_as::<_, TicketExportRow>(
            "SELECT t.id, t.reference_number, t.user_id, u.full_name AS user_name,
                    t.event_id, e.title AS event_title, t.ticket_type_id,
                    tt.name AS ticket_type_name, tt.price AS ticket_type_price,
                    t.purchase_date
             FROM tickets t
             LEFT JOIN users u ON u.id = t.user_id
             LEFT JOIN events e ON e.id = t.event_id
             LEFT JOIN ticket_types tt ON tt.id = t.ticket_type_id
             ORDER BY t.id",
        )
        .fetch_all(pool)
        .await?;

        let mut csv = String::from(
            "ID,Reference Number,User ID,User Name,Event ID,Event Name,\
             Ticket Type ID,Ticket Type,Price,Purchase Date,Status\n",
        );
        for row in &rows {
            let user_name = row.user_name.as_deref().unwrap_or("Unknown User");
            let event_title = row.event_title.as_deref().unwrap_or("Unknown Event");
            let ticket_type_name = row
                .ticket_type_name
                .as_deref()
                .unwrap_or("Unknown Ticket Type");
            let price = row
                .ticket_type_price
                .map(|p| format!("${p}"))
                .unwrap_or_else(|| "N/A".to_string());
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{},Issued\n",
                row.id,
                row.reference_number,
                row.user_id,
                csv_field(user_name),
                row.event_id,
                csv_field(event_title),
                row.ticket_type_id,
                csv_field(ticket_type_name),
                csv_field(&price),
                row.purchase_date.to_rfc3339(),
            ));
        }
        Ok(csv)
    }
}

/// Whether an insert failed specifically on the reference uniqueness
/// constraint (PostgreSQL error 23505).
fn is_reference_collision(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_tickets_reference_number")
        }
        _ => false,
    }
}

fn internal(err: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("ticket issuance failed: {err}"))
}
