//! Event entity model and DTOs.

use partier_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: Timestamp,
    pub location: String,
    pub address: String,
    pub organized_by_id: DbId,
    pub featured: bool,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub date: Timestamp,
    pub location: String,
    pub address: String,
    pub organized_by_id: DbId,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for updating an existing event. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub date: Option<Timestamp>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}
