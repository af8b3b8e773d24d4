//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the (joined) database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity is editable

pub mod genre;
pub mod media_clip;
pub mod movie;
pub mod series;
