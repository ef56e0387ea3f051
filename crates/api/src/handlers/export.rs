//! Handlers for CSV exports (organizer-only file downloads).

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::{HeaderName, StatusCode};
use chrono::Utc;
use partier_db::repositories::{TicketRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireOrganizer;
use crate::state::AppState;

type CsvDownload = (StatusCode, [(HeaderName, String); 2], String);

/// GET /api/export/users
pub async fn export_users(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
) -> AppResult<CsvDownload> {
    let csv = UserRepo::export_csv(&state.pool).await?;
    if csv.lines().count() <= 1 {
        return Err(AppError::NotFound("No users found".into()));
    }
    Ok(csv_download("users_export", csv))
}

/// GET /api/export/tickets
pub async fn export_tickets(
    State(state): State<AppState>,
    RequireOrganizer(_organizer): RequireOrganizer,
) -> AppResult<CsvDownload> {
    let csv = TicketRepo::export_csv(&state.pool).await?;
    if csv.lines().count() <= 1 {
        return Err(AppError::NotFound("No tickets found".into()));
    }
    Ok(csv_download("ticket_sales", csv))
}

/// Wrap a CSV body in download headers with a timestamped filename.
fn csv_download(stem: &str, csv: String) -> CsvDownload {
    let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{stem}_{timestamp}.csv\""),
            ),
        ],
        csv,
    )
}
