//! Admin table filtering over already-fetched rows.
//!
//! The dashboard fetches every movie (or series) and narrows the table in
//! memory: a case-insensitive title search combined with an exact genre
//! match. The genre filter value `all` disables genre matching.

use serde::Deserialize;

/// Sentinel genre value meaning "do not filter by genre".
pub const ALL_GENRES: &str = "all";

/// A row that can be matched by [`AdminFilter`].
pub trait Filterable {
    fn title(&self) -> &str;
    fn genre_name(&self) -> &str;
}

/// Search and genre filter parameters (`?search=&genre=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminFilter {
    pub search: Option<String>,
    pub genre: Option<String>,
}

impl AdminFilter {
    /// Whether a row with this title and genre passes the filter.
    pub fn matches(&self, title: &str, genre: &str) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                title.to_lowercase().contains(&query.to_lowercase())
            }
            _ => true,
        };

        let matches_genre = match self.genre_filter() {
            Some(wanted) => genre.to_lowercase() == wanted.to_lowercase(),
            None => true,
        };

        matches_search && matches_genre
    }

    /// Whether this filter narrows anything at all.
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty()) && self.genre_filter().is_none()
    }

    fn genre_filter(&self) -> Option<&str> {
        self.genre
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case(ALL_GENRES))
    }
}

/// Keep the rows that pass `filter`, preserving their order.
pub fn filter_rows<T: Filterable>(rows: Vec<T>, filter: &AdminFilter) -> Vec<T> {
    if filter.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| filter.matches(row.title(), row.genre_name()))
        .collect()
}
