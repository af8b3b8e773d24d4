pub mod catalog;
pub mod dashboard;
pub mod genre;
pub mod media;
pub mod media_clip;
pub mod movie;
pub mod series;
pub mod upload;
