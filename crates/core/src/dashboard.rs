//! Admin dashboard summary cards.

use serde::Serialize;

/// Raw counts gathered from the database for the stats grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub movies: i64,
    pub series: i64,
    pub genres: i64,
    pub clips: i64,
    pub published: i64,
    pub drafts: i64,
}

/// One card in the dashboard stats grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStat {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
}

/// Build the stats grid in display order.
pub fn dashboard_stats(counts: CatalogCounts) -> Vec<DashboardStat> {
    [
        ("Total Movies", counts.movies, "🎬"),
        ("Total Series", counts.series, "📺"),
        ("Total Genres", counts.genres, "🏷️"),
        ("Total Clips", counts.clips, "🖼️"),
        ("Published", counts.published, "✅"),
        ("Drafts", counts.drafts, "📝"),
    ]
    .into_iter()
    .map(|(title, value, icon)| DashboardStat {
        title,
        value: value.to_string(),
        icon,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_are_in_display_order() {
        let stats = dashboard_stats(CatalogCounts {
            movies: 3,
            series: 2,
            genres: 5,
            clips: 7,
            published: 4,
            drafts: 1,
        });
        let titles: Vec<_> = stats.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            ["Total Movies", "Total Series", "Total Genres", "Total Clips", "Published", "Drafts"]
        );
        assert_eq!(stats[0].value, "3");
        assert_eq!(stats[3].value, "7");
    }

    #[test]
    fn empty_catalog_reports_zeroes() {
        let stats = dashboard_stats(CatalogCounts::default());
        assert!(stats.iter().all(|s| s.value == "0"));
    }
}
