pub mod admin;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog                                 public listing (paginated)
/// /catalog/{id}                            public detail (movie, else series)
/// /genres                                  public genre list
///
/// /admin/stats                             dashboard stats grid
/// /admin/genres                            list, create
/// /admin/genres/{id}                       delete
/// /admin/movies                            list (filtered), create
/// /admin/movies/{id}                       get, update, delete
/// /admin/movies/{id}/poster                upload poster
/// /admin/series                            list (filtered), create
/// /admin/series/{id}                       get, update, delete
/// /admin/series/{id}/poster                upload poster
/// /admin/media/{id}/clips                  list, upload
/// /admin/clips/{id}                        delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public browsing.
        .merge(catalog::router())
        // Admin dashboard.
        .nest("/admin", admin::router())
}
