//! Catalog vocabulary: media kinds, publish statuses, and the default genre.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Genre used when a form omits one.
pub const DEFAULT_GENRE: &str = "Action";

// ---------------------------------------------------------------------------
// MediaKind
// ---------------------------------------------------------------------------

/// The two kinds of catalog entry. Serialized as `movie` / `series`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }

    /// Entity name used in `NotFound` errors.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "Series",
        }
    }

    /// Parse a kind from a query parameter or path segment.
    ///
    /// Accepts the plural forms used in admin tab names as well.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(Self::Movie),
            "series" => Ok(Self::Series),
            other => Err(CoreError::Validation(format!(
                "Unknown media type '{other}'. Must be one of: movie, series"
            ))),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PublishStatus
// ---------------------------------------------------------------------------

/// Status ID type matching SMALLINT in the `publish_statuses` lookup table.
pub type StatusId = i16;

/// Publication status of a movie or series.
///
/// Discriminants match the seed order of the `publish_statuses` table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublishStatus {
    #[default]
    Draft = 1,
    Published = 2,
}

impl PublishStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Parse a status name (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(CoreError::Validation(format!(
                "Unknown status '{other}'. Must be one of: Published, Draft"
            ))),
        }
    }
}
