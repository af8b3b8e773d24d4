//! Handlers for the `/admin/series` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use moviehub_core::catalog::MediaKind;
use moviehub_core::error::CoreError;
use moviehub_core::filter::{filter_rows, AdminFilter};
use moviehub_core::form::{resolve_create, resolve_update, MediaForm, DEFAULT_SEASONS};
use moviehub_core::types::DbId;
use moviehub_core::upload::{UploadKind, CLIP_BUCKET, POSTER_BUCKET};
use moviehub_db::models::series::{CreateSeries, Series, UpdateSeries};
use moviehub_db::repositories::{MediaClipRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::media::{current_year, remove_objects, resolve_genre_id};
use crate::handlers::upload::{read_file_field, store_upload};
use crate::response::{DataResponse, Deleted, MutationResponse, Notice};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MediaKind::Series.entity(),
        id,
    })
}

/// GET /api/v1/admin/series?search=&genre=
///
/// All series (drafts included), narrowed by the dashboard filter.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AdminFilter>,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    let series = SeriesRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: filter_rows(series, &filter),
    }))
}

/// POST /api/v1/admin/series
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<MediaForm>,
) -> AppResult<(StatusCode, Json<MutationResponse<Series>>)> {
    let input = resolve_create(&form, MediaKind::Series, current_year())?;
    let genre_id = resolve_genre_id(&state.pool, &input.genre).await?;

    let series = SeriesRepo::create(
        &state.pool,
        &CreateSeries {
            title: input.title,
            year: input.year,
            genre_id,
            rating: input.rating,
            seasons: input.seasons.unwrap_or(DEFAULT_SEASONS),
            duration: input.duration,
            description: input.description,
            status_id: Some(input.status.id()),
        },
    )
    .await?;

    tracing::info!(series_id = %series.id, title = %series.title, "Series created");
    let notice = Notice::added(&series.title);
    Ok((StatusCode::CREATED, Json(MutationResponse::new(series, notice))))
}

/// GET /api/v1/admin/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Series>>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: series }))
}

/// PUT /api/v1/admin/series/{id}
///
/// Fields absent from the form keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<MediaForm>,
) -> AppResult<Json<MutationResponse<Series>>> {
    let patch = resolve_update(&form, MediaKind::Series)?;
    let genre_id = match &patch.genre {
        Some(name) => Some(resolve_genre_id(&state.pool, name).await?),
        None => None,
    };

    let series = SeriesRepo::update(
        &state.pool,
        id,
        &UpdateSeries {
            title: patch.title,
            year: patch.year,
            genre_id,
            rating: patch.rating,
            seasons: patch.seasons,
            duration: patch.duration,
            description: patch.description,
            status_id: patch.status.map(|s| s.id()),
        },
    )
    .await?
    .ok_or_else(|| not_found(id))?;

    tracing::info!(series_id = %series.id, title = %series.title, "Series updated");
    let notice = Notice::updated(&series.title);
    Ok(Json(MutationResponse::new(series, notice)))
}

/// DELETE /api/v1/admin/series/{id}
///
/// Removes the series and its clips, then their stored files.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse<Deleted>>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let clips = MediaClipRepo::list_by_media(&state.pool, id).await?;

    if !SeriesRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(series_id = %id, clips = clips.len(), "Series deleted");

    let storage = state.storage.as_ref();
    let clip_keys: Vec<&str> = clips.iter().map(|c| c.storage_key.as_str()).collect();
    remove_objects(storage, POSTER_BUCKET, series.poster_key.as_deref().as_slice()).await;
    remove_objects(storage, CLIP_BUCKET, &clip_keys).await;

    Ok(Json(MutationResponse::new(
        Deleted { id },
        Notice::deleted(MediaKind::Series),
    )))
}

/// POST /api/v1/admin/series/{id}/poster
///
/// Multipart form with a required `file` field. Replaces any previous poster.
pub async fn upload_poster(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MutationResponse<Series>>> {
    let existing = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let file = read_file_field(multipart).await?;
    let stored = store_upload(&state, UploadKind::Poster, MediaKind::Series.as_str(), id, file).await?;

    let series = match SeriesRepo::set_poster(
        &state.pool,
        id,
        &stored.object.public_url,
        &stored.object.key,
    )
    .await
    {
        Ok(Some(series)) => series,
        Ok(None) => {
            remove_objects(state.storage.as_ref(), POSTER_BUCKET, &[stored.object.key.as_str()]).await;
            return Err(not_found(id));
        }
        Err(e) => {
            remove_objects(state.storage.as_ref(), POSTER_BUCKET, &[stored.object.key.as_str()]).await;
            return Err(e.into());
        }
    };

    remove_objects(state.storage.as_ref(), POSTER_BUCKET, existing.poster_key.as_deref().as_slice()).await;

    tracing::info!(series_id = %id, key = %stored.object.key, "Series poster replaced");
    Ok(Json(MutationResponse::new(
        series,
        Notice::uploaded(&stored.filename),
    )))
}
