//! Movie entity model and DTOs.

use moviehub_core::catalog::StatusId;
use moviehub_core::filter::Filterable;
use moviehub_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from `movies` with its genre and status names embedded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: i32,
    pub genre_id: DbId,
    /// `genres.name`, joined.
    pub genre: String,
    pub rating: f64,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    /// Object key of the current poster in the `posters` bucket.
    #[serde(skip_serializing)]
    pub poster_key: Option<String>,
    pub status_id: StatusId,
    /// `publish_statuses.name`, joined.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    pub genre_id: DbId,
    pub rating: f64,
    pub duration: Option<String>,
    pub description: Option<String>,
    /// Defaults to 1 (Draft) if omitted.
    pub status_id: Option<StatusId>,
}

/// DTO for updating an existing movie. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre_id: Option<DbId>,
    pub rating: Option<f64>,
    /// `Some(None)` clears the stored value.
    pub duration: Option<Option<String>>,
    /// `Some(None)` clears the stored value.
    pub description: Option<Option<String>>,
    pub status_id: Option<StatusId>,
}

impl Filterable for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn genre_name(&self) -> &str {
        &self.genre
    }
}
