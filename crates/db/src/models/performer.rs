//! Performer entity model and DTOs.

use partier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A performer row from the `performers` table. Pure display metadata.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Performer {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub image_url: String,
    pub time: String,
    pub is_headliner: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new performer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerformer {
    pub event_id: DbId,
    pub name: String,
    pub image_url: String,
    pub time: String,
    #[serde(default)]
    pub is_headliner: bool,
}
