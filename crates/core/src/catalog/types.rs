//! Types for the video catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A video record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Record id.
    pub id: Uuid,
    /// Owning user id.
    pub owner_id: Uuid,
    /// Display title.
    pub title: String,
    /// Freeform description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// Retrieval URL of the published, normalized video (if uploaded).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Retrieval URL of the thumbnail (if set).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Request to create a new video record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoRequest {
    pub owner_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(Uuid),

    #[error("Internal error: {0}")]
    Internal(String),
}
