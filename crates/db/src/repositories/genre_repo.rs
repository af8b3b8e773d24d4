//! Repository for the `genres` table.

use moviehub_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre};

const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre. Fails with a `uq_genres_name` violation if a genre
    /// with the same name (ignoring case) exists.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(new_id())
            .bind(input.name.trim())
            .fetch_one(pool)
            .await
    }

    /// List all genres alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY lower(name)");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a genre by name, ignoring case and surrounding whitespace.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE lower(name) = lower($1)");
        sqlx::query_as::<_, Genre>(&query)
            .bind(name.trim())
            .fetch_optional(pool)
            .await
    }

    /// Delete a genre. Fails with a foreign key violation while any movie or
    /// series still references it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
