//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project conventions.
//! Mutations add a `notice` the dashboard shows as a toast.

use moviehub_core::catalog::MediaKind;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "notice": {...} }` envelope for create/update/delete/upload.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub data: T,
    pub notice: Notice,
}

impl<T: Serialize> MutationResponse<T> {
    pub fn new(data: T, notice: Notice) -> Self {
        Self { data, notice }
    }
}

/// A short success message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
}

impl Notice {
    pub fn added(name: &str) -> Self {
        Self {
            title: "Added",
            description: format!("{name} has been added successfully."),
        }
    }

    pub fn updated(name: &str) -> Self {
        Self {
            title: "Updated",
            description: format!("{name} has been updated successfully."),
        }
    }

    pub fn deleted(kind: MediaKind) -> Self {
        Self::deleted_named(kind.as_str())
    }

    pub fn deleted_named(what: &str) -> Self {
        Self {
            title: "Deleted",
            description: format!("{what} has been deleted successfully."),
        }
    }

    pub fn uploaded(filename: &str) -> Self {
        Self {
            title: "Uploaded",
            description: format!("{filename} has been uploaded successfully."),
        }
    }
}

/// Identifier of a removed record.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: moviehub_core::types::DbId,
}
