//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters of the public listing (`?page=&per_page=&type=&q=`).
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    /// 1-based page number; out-of-range values are clamped.
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Restrict to `movie` or `series`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Case-insensitive title search.
    pub q: Option<String>,
}
