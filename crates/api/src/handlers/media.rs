//! Helpers shared by the movie and series handlers.

use chrono::Datelike;
use moviehub_core::error::CoreError;
use moviehub_core::types::DbId;
use moviehub_db::repositories::GenreRepo;
use moviehub_db::DbPool;
use moviehub_storage::ObjectStorage;

use crate::error::{AppError, AppResult};

/// Year pre-filled in the add dialog.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Map a submitted genre name to its row ID.
pub async fn resolve_genre_id(pool: &DbPool, name: &str) -> AppResult<DbId> {
    let genre = GenreRepo::find_by_name(pool, name).await?.ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!("Unknown genre '{name}'")))
    })?;
    Ok(genre.id)
}

/// Delete stored objects, logging failures instead of propagating them.
///
/// The database row is already gone by the time this runs, so an orphaned
/// object is the worst outcome.
pub async fn remove_objects(storage: &dyn ObjectStorage, bucket: &str, keys: &[&str]) {
    for &key in keys {
        if let Err(e) = storage.delete(bucket, key).await {
            tracing::warn!(bucket, key, error = %e, "Failed to remove stored object");
        }
    }
}
