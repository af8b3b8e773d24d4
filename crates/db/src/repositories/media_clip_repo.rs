//! Repository for the `media_clips` table.

use moviehub_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::media_clip::{CreateMediaClip, MediaClip};

const COLUMNS: &str =
    "id, media_id, media_kind, clip_url, storage_key, content_type, size_bytes, created_at";

/// Provides CRUD operations for media clips.
pub struct MediaClipRepo;

impl MediaClipRepo {
    pub async fn create(pool: &PgPool, input: &CreateMediaClip) -> Result<MediaClip, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_clips (id, media_id, media_kind, clip_url, storage_key, content_type, size_bytes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MediaClip>(&query)
            .bind(new_id())
            .bind(input.media_id)
            .bind(&input.media_kind)
            .bind(&input.clip_url)
            .bind(&input.storage_key)
            .bind(&input.content_type)
            .bind(input.size_bytes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MediaClip>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media_clips WHERE id = $1");
        sqlx::query_as::<_, MediaClip>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the clips of one movie or series in upload order.
    pub async fn list_by_media(
        pool: &PgPool,
        media_id: DbId,
    ) -> Result<Vec<MediaClip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media_clips WHERE media_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, MediaClip>(&query)
            .bind(media_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a clip by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_clips WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
