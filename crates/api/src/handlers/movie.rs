//! Handlers for the `/admin/movies` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use moviehub_core::catalog::MediaKind;
use moviehub_core::error::CoreError;
use moviehub_core::filter::{filter_rows, AdminFilter};
use moviehub_core::form::{resolve_create, resolve_update, MediaForm};
use moviehub_core::types::DbId;
use moviehub_core::upload::{UploadKind, CLIP_BUCKET, POSTER_BUCKET};
use moviehub_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use moviehub_db::repositories::{MediaClipRepo, MovieRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::media::{current_year, remove_objects, resolve_genre_id};
use crate::handlers::upload::{read_file_field, store_upload};
use crate::response::{DataResponse, Deleted, MutationResponse, Notice};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MediaKind::Movie.entity(),
        id,
    })
}

/// GET /api/v1/admin/movies?search=&genre=
///
/// All movies (drafts included), narrowed by the dashboard filter.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<AdminFilter>,
) -> AppResult<Json<DataResponse<Vec<Movie>>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: filter_rows(movies, &filter),
    }))
}

/// POST /api/v1/admin/movies
pub async fn create(
    State(state): State<AppState>,
    Json(form): Json<MediaForm>,
) -> AppResult<(StatusCode, Json<MutationResponse<Movie>>)> {
    let input = resolve_create(&form, MediaKind::Movie, current_year())?;
    let genre_id = resolve_genre_id(&state.pool, &input.genre).await?;

    let movie = MovieRepo::create(
        &state.pool,
        &CreateMovie {
            title: input.title,
            year: input.year,
            genre_id,
            rating: input.rating,
            duration: input.duration,
            description: input.description,
            status_id: Some(input.status.id()),
        },
    )
    .await?;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");
    let notice = Notice::added(&movie.title);
    Ok((StatusCode::CREATED, Json(MutationResponse::new(movie, notice))))
}

/// GET /api/v1/admin/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: movie }))
}

/// PUT /api/v1/admin/movies/{id}
///
/// Fields absent from the form keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(form): Json<MediaForm>,
) -> AppResult<Json<MutationResponse<Movie>>> {
    let patch = resolve_update(&form, MediaKind::Movie)?;
    let genre_id = match &patch.genre {
        Some(name) => Some(resolve_genre_id(&state.pool, name).await?),
        None => None,
    };

    let movie = MovieRepo::update(
        &state.pool,
        id,
        &UpdateMovie {
            title: patch.title,
            year: patch.year,
            genre_id,
            rating: patch.rating,
            duration: patch.duration,
            description: patch.description,
            status_id: patch.status.map(|s| s.id()),
        },
    )
    .await?
    .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie updated");
    let notice = Notice::updated(&movie.title);
    Ok(Json(MutationResponse::new(movie, notice)))
}

/// DELETE /api/v1/admin/movies/{id}
///
/// Removes the movie and its clips, then their stored files.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse<Deleted>>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let clips = MediaClipRepo::list_by_media(&state.pool, id).await?;

    if !MovieRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(movie_id = %id, clips = clips.len(), "Movie deleted");

    let storage = state.storage.as_ref();
    let clip_keys: Vec<&str> = clips.iter().map(|c| c.storage_key.as_str()).collect();
    remove_objects(storage, POSTER_BUCKET, movie.poster_key.as_deref().as_slice()).await;
    remove_objects(storage, CLIP_BUCKET, &clip_keys).await;

    Ok(Json(MutationResponse::new(
        Deleted { id },
        Notice::deleted(MediaKind::Movie),
    )))
}

/// POST /api/v1/admin/movies/{id}/poster
///
/// Multipart form with a required `file` field. Replaces any previous poster.
pub async fn upload_poster(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<MutationResponse<Movie>>> {
    let existing = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let file = read_file_field(multipart).await?;
    let stored = store_upload(&state, UploadKind::Poster, MediaKind::Movie.as_str(), id, file).await?;

    let movie = match MovieRepo::set_poster(
        &state.pool,
        id,
        &stored.object.public_url,
        &stored.object.key,
    )
    .await
    {
        Ok(Some(movie)) => movie,
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

    tracing::info!(movie_id = %id, key = %stored.object.key, "Movie poster replaced");
    Ok(Json(MutationResponse::new(
        movie,
        Notice::uploaded(&stored.filename),
    )))
}
