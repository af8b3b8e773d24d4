//! Handlers for media clips (screenshots and short videos).
//!
//! Clips belong to either a movie or a series; the owner is looked up by ID
//! in both tables, movies first.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use moviehub_core::catalog::MediaKind;
use moviehub_core::error::CoreError;
use moviehub_core::types::DbId;
use moviehub_core::upload::{UploadKind, CLIP_BUCKET};
use moviehub_db::models::media_clip::{CreateMediaClip, MediaClip};
use moviehub_db::repositories::{MediaClipRepo, MovieRepo, SeriesRepo};
use moviehub_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::media::remove_objects;
use crate::handlers::upload::{read_file_field, store_upload};
use crate::response::{DataResponse, Deleted, MutationResponse, Notice};
use crate::state::AppState;

/// Which table `id` lives in, if any.
async fn owner_kind(pool: &DbPool, id: DbId) -> AppResult<MediaKind> {
    if MovieRepo::find_by_id(pool, id).await?.is_some() {
        return Ok(MediaKind::Movie);
    }
    if SeriesRepo::find_by_id(pool, id).await?.is_some() {
        return Ok(MediaKind::Series);
    }
    Err(AppError::Core(CoreError::NotFound { entity: "Media", id }))
}

/// GET /api/v1/admin/media/{id}/clips
pub async fn list_by_media(
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MediaClip>>>> {
    owner_kind(&state.pool, media_id).await?;
    let clips = MediaClipRepo::list_by_media(&state.pool, media_id).await?;
    Ok(Json(DataResponse { data: clips }))
}

/// POST /api/v1/admin/media/{id}/clips
///
/// Multipart form with a required `file` field.
pub async fn upload(
    State(state): State<AppState>,
    Path(media_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<MutationResponse<MediaClip>>)> {
    let kind = owner_kind(&state.pool, media_id).await?;

    let file = read_file_field(multipart).await?;
    let stored = store_upload(&state, UploadKind::Clip, kind.as_str(), media_id, file).await?;

    let input = CreateMediaClip {
        media_id,
        media_kind: kind.as_str().to_string(),
        clip_url: stored.object.public_url.clone(),
        storage_key: stored.object.key.clone(),
        content_type: stored.content_type.to_string(),
        size_bytes: stored.object.size_bytes as i64,
    };

    let clip = match MediaClipRepo::create(&state.pool, &input).await {
        Ok(clip) => clip,
        Err(e) => {
            remove_objects(state.storage.as_ref(), CLIP_BUCKET, &[stored.object.key.as_str()]).await;
            return Err(e.into());
        }
    };

    tracing::info!(clip_id = %clip.id, media_id = %media_id, kind = %kind, "Clip uploaded");
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new(clip, Notice::uploaded(&stored.filename))),
    ))
}

/// DELETE /api/v1/admin/clips/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse<Deleted>>> {
    let clip = MediaClipRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MediaClip",
            id,
        }))?;

    if !MediaClipRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MediaClip",
            id,
        }));
    }
    remove_objects(state.storage.as_ref(), CLIP_BUCKET, &[clip.storage_key.as_str()]).await;

    tracing::info!(clip_id = %id, "Clip deleted");
    Ok(Json(MutationResponse::new(
        Deleted { id },
        Notice::deleted_named("clip"),
    )))
}
