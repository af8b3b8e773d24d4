//! Aggregate counts for the admin dashboard.

use moviehub_core::catalog::PublishStatus;
use moviehub_core::dashboard::CatalogCounts;
use sqlx::PgPool;

/// Provides the counts behind the dashboard stats grid.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Count every table in a single round trip.
    pub async fn counts(pool: &PgPool) -> Result<CatalogCounts, sqlx::Error> {
        let (movies, series, genres, clips, published, drafts): (i64, i64, i64, i64, i64, i64) =
            sqlx::query_as(
                "SELECT
                    (SELECT COUNT(*) FROM movies),
                    (SELECT COUNT(*) FROM series),
                    (SELECT COUNT(*) FROM genres),
                    (SELECT COUNT(*) FROM media_clips),
                    (SELECT COUNT(*) FROM movies WHERE status_id = $1)
                        + (SELECT COUNT(*) FROM series WHERE status_id = $1),
                    (SELECT COUNT(*) FROM movies WHERE status_id = $2)
                        + (SELECT COUNT(*) FROM series WHERE status_id = $2)",
            )
            .bind(PublishStatus::Published.id())
            .bind(PublishStatus::Draft.id())
            .fetch_one(pool)
            .await?;

        Ok(CatalogCounts {
            movies,
            series,
            genres,
            clips,
            published,
            drafts,
        })
    }
}
