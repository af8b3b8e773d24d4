//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::{catalog, genre};
use crate::state::AppState;

/// Public routes merged into `/api/v1`.
///
/// ```text
/// GET    /catalog             -> list
/// GET    /catalog/{id}        -> get_by_id
/// GET    /genres              -> list_genres
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::list))
        .route("/catalog/{id}", get(catalog::get_by_id))
        .route("/genres", get(genre::list))
}
