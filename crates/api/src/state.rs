use std::sync::Arc;

use moviehub_storage::{HttpStorage, LocalStorage, ObjectStorage, StorageError};

use crate::config::{ServerConfig, StorageConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: moviehub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object storage for posters and clips.
    pub storage: Arc<dyn ObjectStorage>,
}

/// Build the storage provider selected by configuration.
pub fn build_storage(config: &StorageConfig) -> Result<Arc<dyn ObjectStorage>, StorageError> {
    let storage: Arc<dyn ObjectStorage> = match config {
        StorageConfig::Local {
            root,
            public_base_url,
        } => Arc::new(LocalStorage::new(root.clone(), public_base_url.clone())),
        StorageConfig::Http { api_url, api_key } => {
            Arc::new(HttpStorage::new(api_url.clone(), api_key.clone())?)
        }
    };
    Ok(storage)
}
