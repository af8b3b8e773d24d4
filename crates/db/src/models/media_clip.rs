//! Media clip entity model and DTOs.

use moviehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media_clips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaClip {
    pub id: DbId,
    /// Owning movie or series.
    pub media_id: DbId,
    /// `movie` or `series`.
    pub media_kind: String,
    pub clip_url: String,
    #[serde(skip_serializing)]
    pub storage_key: String,
    pub content_type: String,
    pub size_bytes: i64,
    pub created_at: Timestamp,
}

/// DTO for recording an uploaded clip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMediaClip {
    pub media_id: DbId,
    pub media_kind: String,
    pub clip_url: String,
    pub storage_key: String,
    pub content_type: String,
    pub size_bytes: i64,
}
