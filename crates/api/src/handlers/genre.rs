//! Handlers for genres.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use moviehub_core::error::CoreError;
use moviehub_core::types::DbId;
use moviehub_db::models::genre::{CreateGenre, Genre};
use moviehub_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::response::{DataResponse, Deleted, MutationResponse, Notice};
use crate::state::AppState;

/// GET /api/v1/genres and GET /api/v1/admin/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Genre>>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// POST /api/v1/admin/genres
///
/// Returns 409 if a genre with the same name (ignoring case) exists.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<MutationResponse<Genre>>)> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be blank".into(),
        )));
    }
    if name.chars().count() > 100 {
        return Err(AppError::Core(CoreError::Validation(
            "name must be at most 100 characters".into(),
        )));
    }

    let input = CreateGenre {
        name: name.to_string(),
    };
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = %genre.id, name = %genre.name, "Genre created");

    let notice = Notice::added(&genre.name);
    Ok((StatusCode::CREATED, Json(MutationResponse::new(genre, notice))))
}

/// DELETE /api/v1/admin/genres/{id}
///
/// Returns 409 while any movie or series still uses the genre.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MutationResponse<Deleted>>> {
    let genre = GenreRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))?;

    if !GenreRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Genre", id }));
    }
    tracing::info!(genre_id = %id, name = %genre.name, "Genre deleted");

    Ok(Json(MutationResponse::new(
        Deleted { id },
        Notice::deleted_named(&genre.name),
    )))
}
