//! Page arithmetic for the public listing.
//!
//! Pages are 1-based. The listing is built in memory and sliced here, so
//! the page math is the only place that decides what a page contains.

use serde::Serialize;

/// Items shown per page on the public listing.
pub const ITEMS_PER_PAGE: usize = 12;

/// Upper bound for a caller-supplied page size.
pub const MAX_PER_PAGE: usize = 60;

/// One page of a listing plus the numbers needed to render pagination links.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Number of pages needed for `total_items` (0 when there are none).
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total_items.div_ceil(per_page)
}

/// Clamp a requested page into `1..=total_pages` (or 1 when empty).
pub fn clamp_page(requested: Option<i64>, total_pages: usize) -> usize {
    let requested = requested.unwrap_or(1).max(1) as usize;
    requested.min(total_pages.max(1))
}

/// Clamp a requested page size into `1..=MAX_PER_PAGE`.
pub fn clamp_per_page(requested: Option<i64>) -> usize {
    match requested {
        Some(n) if n >= 1 => (n as usize).min(MAX_PER_PAGE),
        Some(_) => 1,
        None => ITEMS_PER_PAGE,
    }
}

/// Slice `items` down to the requested page.
pub fn paginate<T: Serialize>(items: Vec<T>, page: Option<i64>, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, per_page);
    let page = clamp_page(page, total_pages);

    let start = (page - 1) * per_page;
    let items: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

    Page {
        items,
        page,
        per_page,
        total_items,
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}
