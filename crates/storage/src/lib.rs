//! Object storage providers for posters and media clips.
//!
//! [`ObjectStorage`] is the seam between the API and wherever uploaded
//! bytes live. Two providers ship:
//!
//! - [`LocalStorage`]: files under a root directory, served back by the API.
//! - [`HttpStorage`]: a hosted storage REST API (bucket/object endpoints with
//!   bearer auth and public object URLs).

pub mod http;
pub mod local;

use async_trait::async_trait;

pub use http::HttpStorage;
pub use local::LocalStorage;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The bucket or object key is not a safe relative path.
    #[error("Invalid object key '{0}'")]
    InvalidKey(String),

    /// Local filesystem failure.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service returned a non-2xx status code.
    #[error("Storage service returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// Provider trait
// ---------------------------------------------------------------------------

/// An object written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub public_url: String,
    pub size_bytes: usize,
}

/// A bucket/key object store with publicly readable objects.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Write `bytes` to `bucket/key`, replacing any existing object.
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError>;

    /// Remove `bucket/key`. Removing a missing object is not an error.
    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError>;

    /// Public URL clients use to fetch `bucket/key`.
    fn public_url(&self, bucket: &str, key: &str) -> String;

    /// Short provider name for logs and health output.
    fn name(&self) -> &'static str;
}

/// Reject keys that could escape the bucket or are not plain relative paths.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.contains('\0')
        || key
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..");
    if invalid {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Join a base URL and path segments with exactly one `/` between each.
pub(crate) fn join_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(segment.trim_matches('/'));
    }
    url
}
