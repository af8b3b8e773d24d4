//! Admin add/edit form validation and form-to-record mapping.
//!
//! The dashboard dialog submits a flat [`MediaForm`]. On create, missing
//! fields take the dialog's defaults; on update, missing fields keep the
//! stored value. Genre resolution (name -> id) needs the database and happens
//! in the caller.

use serde::Deserialize;
use validator::Validate;

use crate::catalog::{MediaKind, PublishStatus, DEFAULT_GENRE};
use crate::error::CoreError;

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1888;

/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2100;

/// Rating pre-filled in the add dialog.
pub const DEFAULT_RATING: f64 = 5.0;

/// Season count pre-filled in the add dialog (series only).
pub const DEFAULT_SEASONS: i32 = 1;

/// Raw form submission for a movie or series.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MediaForm {
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub title: Option<String>,
    #[validate(range(min = 1888, max = 2100, message = "must be between 1888 and 2100"))]
    pub year: Option<i32>,
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub genre: Option<String>,
    #[validate(range(min = 0.0, max = 10.0, message = "must be between 0 and 10"))]
    pub rating: Option<f64>,
    pub status: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub seasons: Option<i32>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub duration: Option<String>,
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub description: Option<String>,
}

/// Whether the form creates a new entry or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// A fully-resolved record ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInput {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub rating: f64,
    pub status: PublishStatus,
    /// Always `Some` for series, always `None` for movies.
    pub seasons: Option<i32>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// A partial update. `None` fields are left untouched.
///
/// The optional text fields nest a second `Option`: `Some(None)` clears the
/// stored value, which is what submitting a blank field means.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaPatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub status: Option<PublishStatus>,
    pub seasons: Option<i32>,
    pub duration: Option<Option<String>>,
    pub description: Option<Option<String>>,
}

/// Validate a submitted form for the given kind and mode.
pub fn validate_media_form(
    form: &MediaForm,
    kind: MediaKind,
    mode: FormMode,
) -> Result<(), CoreError> {
    form.validate()?;

    match (&form.title, mode) {
        (None, FormMode::Create) => {
            return Err(CoreError::Validation("title is required".into()));
        }
        (Some(title), _) if title.trim().is_empty() => {
            return Err(CoreError::Validation("title must not be blank".into()));
        }
        _ => {}
    }

    if let Some(rating) = form.rating {
        if !rating.is_finite() {
            return Err(CoreError::Validation("rating must be a number".into()));
        }
    }

    if kind == MediaKind::Movie && form.seasons.is_some() {
        return Err(CoreError::Validation(
            "seasons is only valid for series".into(),
        ));
    }

    if let Some(genre) = &form.genre {
        if genre.trim().is_empty() {
            return Err(CoreError::Validation("genre must not be blank".into()));
        }
    }

    if let Some(status) = &form.status {
        PublishStatus::parse(status)?;
    }

    Ok(())
}

/// Validate a create form and apply the dialog defaults.
pub fn resolve_create(
    form: &MediaForm,
    kind: MediaKind,
    current_year: i32,
) -> Result<MediaInput, CoreError> {
    validate_media_form(form, kind, FormMode::Create)?;

    let status = match &form.status {
        Some(s) => PublishStatus::parse(s)?,
        None => PublishStatus::default(),
    };

    let seasons = match kind {
        MediaKind::Movie => None,
        MediaKind::Series => Some(form.seasons.unwrap_or(DEFAULT_SEASONS)),
    };

    Ok(MediaInput {
        title: form.title.as_deref().unwrap_or_default().trim().to_string(),
        year: form.year.unwrap_or(current_year),
        genre: form
            .genre
            .as_deref()
            .map(str::trim)
            .unwrap_or(DEFAULT_GENRE)
            .to_string(),
        rating: round_rating(form.rating.unwrap_or(DEFAULT_RATING)),
        status,
        seasons,
        duration: non_blank(form.duration.as_deref()),
        description: non_blank(form.description.as_deref()),
    })
}

/// Validate an update form and convert it into a patch.
pub fn resolve_update(form: &MediaForm, kind: MediaKind) -> Result<MediaPatch, CoreError> {
    validate_media_form(form, kind, FormMode::Update)?;

    let status = form
        .status
        .as_deref()
        .map(PublishStatus::parse)
        .transpose()?;

    Ok(MediaPatch {
        title: form.title.as_deref().map(|t| t.trim().to_string()),
        year: form.year,
        genre: form.genre.as_deref().map(|g| g.trim().to_string()),
        rating: form.rating.map(round_rating),
        status,
        seasons: form.seasons,
        duration: form.duration.as_deref().map(|d| non_blank(Some(d))),
        description: form.description.as_deref().map(|d| non_blank(Some(d))),
    })
}

/// Ratings are entered with one decimal step.
fn round_rating(rating: f64) -> f64 {
    (rating * 10.0).round() / 10.0
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
