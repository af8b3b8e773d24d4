//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod genre_repo;
pub mod media_clip_repo;
pub mod movie_repo;
pub mod series_repo;

pub use dashboard_repo::DashboardRepo;
pub use genre_repo::GenreRepo;
pub use media_clip_repo::MediaClipRepo;
pub use movie_repo::MovieRepo;
pub use series_repo::SeriesRepo;
