//! View models returned by the public catalog endpoints.

use moviehub_core::catalog::MediaKind;
use moviehub_core::filter::Filterable;
use moviehub_core::types::DbId;
use moviehub_db::models::media_clip::MediaClip;
use moviehub_db::models::movie::Movie;
use moviehub_db::models::series::Series;
use serde::Serialize;

/// A card on the public listing.
#[derive(Debug, Clone, Serialize)]
pub struct MediaCard {
    pub id: DbId,
    pub title: String,
    pub poster: Option<String>,
    pub rating: f64,
    pub year: i32,
    pub duration: Option<String>,
    pub genre: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<i32>,
}

impl From<Movie> for MediaCard {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            poster: movie.poster_url,
            rating: movie.rating,
            year: movie.year,
            duration: movie.duration,
            genre: movie.genre,
            kind: MediaKind::Movie,
            seasons: None,
        }
    }
}

impl From<Series> for MediaCard {
    fn from(series: Series) -> Self {
        Self {
            id: series.id,
            title: series.title,
            poster: series.poster_url,
            rating: series.rating,
            year: series.year,
            duration: series.duration,
            genre: series.genre,
            kind: MediaKind::Series,
            seasons: Some(series.seasons),
        }
    }
}

impl Filterable for MediaCard {
    fn title(&self) -> &str {
        &self.title
    }

    fn genre_name(&self) -> &str {
        &self.genre
    }
}

/// The detail page: card fields, description, and screenshots.
#[derive(Debug, Clone, Serialize)]
pub struct MediaDetail {
    #[serde(flatten)]
    pub card: MediaCard,
    pub description: Option<String>,
    pub clips: Vec<MediaClip>,
}

impl MediaDetail {
    pub fn from_movie(mut movie: Movie, clips: Vec<MediaClip>) -> Self {
        let description = movie.description.take();
        Self {
            card: movie.into(),
            description,
            clips,
        }
    }

    pub fn from_series(mut series: Series, clips: Vec<MediaClip>) -> Self {
        let description = series.description.take();
        Self {
            card: series.into(),
            description,
            clips,
        }
    }
}
