//! Handlers for the public catalog (listing and detail pages).

use axum::extract::{Path, Query, State};
use axum::Json;
use moviehub_core::catalog::{MediaKind, PublishStatus};
use moviehub_core::error::CoreError;
use moviehub_core::filter::{filter_rows, AdminFilter};
use moviehub_core::pagination::{clamp_per_page, paginate, Page};
use moviehub_core::types::DbId;
use moviehub_db::repositories::{MediaClipRepo, MovieRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::query::CatalogParams;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{MediaCard, MediaDetail};

/// GET /api/v1/catalog?page=&per_page=&type=&q=
///
/// Published movies followed by published series, optionally narrowed to
/// one kind and a title search, then sliced into pages.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> AppResult<Json<DataResponse<Page<MediaCard>>>> {
    let only = params
        .kind
        .as_deref()
        .filter(|k| !k.trim().is_empty())
        .map(MediaKind::parse)
        .transpose()?;

    let mut cards: Vec<MediaCard> = Vec::new();
    if only != Some(MediaKind::Series) {
        let movies = MovieRepo::list_published(&state.pool).await?;
        cards.extend(movies.into_iter().map(MediaCard::from));
    }
    if only != Some(MediaKind::Movie) {
        let series = SeriesRepo::list_published(&state.pool).await?;
        cards.extend(series.into_iter().map(MediaCard::from));
    }

    let search = AdminFilter {
        search: params.q,
        genre: None,
    };
    let cards = filter_rows(cards, &search);

    let page = paginate(cards, params.page, clamp_per_page(params.per_page));
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/catalog/{id}
///
/// Looks the ID up as a movie first, then as a series. Drafts are hidden
/// here as they are from the listing.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MediaDetail>>> {
    let published = PublishStatus::Published.id();
    let not_found = || AppError::Core(CoreError::NotFound { entity: "Media", id });

    if let Some(movie) = MovieRepo::find_by_id(&state.pool, id).await? {
        if movie.status_id != published {
            return Err(not_found());
        }
        let clips = MediaClipRepo::list_by_media(&state.pool, id).await?;
        return Ok(Json(DataResponse {
            data: MediaDetail::from_movie(movie, clips),
        }));
    }

    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|series| series.status_id == published)
        .ok_or_else(not_found)?;
    let clips = MediaClipRepo::list_by_media(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: MediaDetail::from_series(series, clips),
    }))
}
