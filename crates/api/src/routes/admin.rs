//! Route definitions for the admin dashboard.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{dashboard, genre, media_clip, movie, series};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /stats                   -> dashboard::stats
///
/// GET    /genres                  -> genre::list
/// POST   /genres                  -> genre::create
/// DELETE /genres/{id}             -> genre::delete
///
/// GET    /movies                  -> movie::list
/// POST   /movies                  -> movie::create
/// GET    /movies/{id}             -> movie::get_by_id
/// PUT    /movies/{id}             -> movie::update
/// DELETE /movies/{id}             -> movie::delete
/// POST   /movies/{id}/poster      -> movie::upload_poster
///
/// (same six routes under /series)
///
/// GET    /media/{id}/clips        -> media_clip::list_by_media
/// POST   /media/{id}/clips        -> media_clip::upload
/// DELETE /clips/{id}              -> media_clip::delete
/// ```
pub fn router() -> Router<AppState> {
    let movie_routes = Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
        .route("/{id}/poster", post(movie::upload_poster));

    let series_routes = Router::new()
        .route("/", get(series::list).post(series::create))
        .route(
            "/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
        .route("/{id}/poster", post(series::upload_poster));

    Router::new()
        .route("/stats", get(dashboard::stats))
        .route("/genres", get(genre::list).post(genre::create))
        .route("/genres/{id}", delete(genre::delete))
        .nest("/movies", movie_routes)
        .nest("/series", series_routes)
        .route(
            "/media/{id}/clips",
            get(media_clip::list_by_media).post(media_clip::upload),
        )
        .route("/clips/{id}", delete(media_clip::delete))
}
