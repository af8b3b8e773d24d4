//! Repository for the `series` table.
//!
//! Mirrors the movie repository with the extra `seasons` column.

use moviehub_core::catalog::PublishStatus;
use moviehub_core::types::{new_id, DbId};
use sqlx::PgPool;

use crate::models::series::{CreateSeries, Series, UpdateSeries};

/// Column list of the joined row, aliased against `m`, `g` and `s`.
const COLUMNS: &str = "m.id, m.title, m.year, m.genre_id, g.name AS genre, m.rating, \
     m.seasons, m.duration, m.description, m.poster_url, m.poster_key, m.status_id, \
     s.name AS status, m.created_at, m.updated_at";

/// Joins embedding the genre and status names.
const JOINS: &str = "JOIN genres g ON g.id = m.genre_id \
     JOIN publish_statuses s ON s.id = m.status_id";

/// Provides CRUD operations for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Draft).
    pub async fn create(pool: &PgPool, input: &CreateSeries) -> Result<Series, sqlx::Error> {
        let query = format!(
            "WITH m AS (
                INSERT INTO series (id, title, year, genre_id, rating, seasons, duration, description, status_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, 1))
                RETURNING *
             )
             SELECT {COLUMNS} FROM m {JOINS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(new_id())
            .bind(&input.title)
            .bind(input.year)
            .bind(input.genre_id)
            .bind(input.rating)
            .bind(input.seasons)
            .bind(&input.duration)
            .bind(&input.description)
            .bind(input.status_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series m {JOINS} WHERE m.id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all series, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series m {JOINS} ORDER BY m.created_at DESC, m.id DESC"
        );
        sqlx::query_as::<_, Series>(&query).fetch_all(pool).await
    }

    /// List published series, newest first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series m {JOINS}
             WHERE m.status_id = $1
             ORDER BY m.created_at DESC, m.id DESC"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(PublishStatus::Published.id())
            .fetch_all(pool)
            .await
    }

    /// Update a series. Only non-`None` fields in `input` are applied;
    /// `duration`/`description` set to `Some(None)` become NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeries,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "WITH m AS (
                UPDATE series SET
                    title = COALESCE($2, title),
                    year = COALESCE($3, year),
                    genre_id = COALESCE($4, genre_id),
                    rating = COALESCE($5, rating),
                    seasons = COALESCE($6, seasons),
                    duration = CASE WHEN $10 THEN NULL ELSE COALESCE($7, duration) END,
                    description = CASE WHEN $11 THEN NULL ELSE COALESCE($8, description) END,
                    status_id = COALESCE($9, status_id)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM m {JOINS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.year)
            .bind(input.genre_id)
            .bind(input.rating)
            .bind(input.seasons)
            .bind(input.duration.as_ref().and_then(Option::as_deref))
            .bind(input.description.as_ref().and_then(Option::as_deref))
            .bind(input.status_id)
            .bind(matches!(input.duration, Some(None)))
            .bind(matches!(input.description, Some(None)))
            .fetch_optional(pool)
            .await
    }

    /// Point the series at a newly uploaded poster.
    pub async fn set_poster(
        pool: &PgPool,
        id: DbId,
        poster_url: &str,
        poster_key: &str,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "WITH m AS (
                UPDATE series SET poster_url = $2, poster_key = $3
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM m {JOINS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(poster_url)
            .bind(poster_key)
            .fetch_optional(pool)
            .await
    }

    /// Delete a series and its clips in one transaction.
    ///
    /// Returns `true` if the series existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM media_clips WHERE media_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
