//! Handler for QR scan validation.
//!
//! The scanner posts whatever text the code reader decoded. The response is
//! always 200: malformed codes, unknown references, and lookup failures all
//! degrade to the invalid outcome so the scanner UI can show its own
//! "invalid ticket" state instead of an error page.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use partier_core::reference;
use partier_core::scanner::{self, ScanVerdict};
use partier_db::models::ticket::Ticket;
use partier_db::repositories::TicketRepo;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Request body for `POST /api/scan`.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// The decoded QR payload.
    pub code: String,
}

/// Scan outcome for the scanner display.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub valid: bool,
    pub message: &'static str,
    /// Present only for a valid scan: the quantity, reference, and purchase
    /// date the door staff confirm against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<Ticket>,
}

/// POST /api/scan
pub async fn validate_scan(
    State(state): State<AppState>,
    Json(input): Json<ScanRequest>,
) -> Json<ScanResponse> {
    if !reference::is_reference(&input.code) {
        return Json(verdict_response(ScanVerdict::NotFound, None));
    }

    let ticket = match TicketRepo::find_by_reference(&state.pool, &input.code).await {
        Ok(ticket) => ticket,
        Err(err) => {
            // Lookup errors surface to the operator as an invalid scan.
            tracing::warn!(error = %err, code = %input.code, "Scan lookup failed");
            None
        }
    };

    let verdict = scanner::evaluate(ticket.as_ref().map(|t| t.purchase_date), Utc::now());
    Json(verdict_response(verdict, ticket))
}

fn verdict_response(verdict: ScanVerdict, ticket: Option<Ticket>) -> ScanResponse {
    ScanResponse {
        valid: verdict.is_valid(),
        message: verdict.message(),
        ticket: ticket.filter(|_| verdict.is_valid()),
    }
}
