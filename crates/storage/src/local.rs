//! Filesystem-backed object storage.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::{join_url, validate_key, ObjectStorage, StorageError, StoredObject};

/// Stores objects at `{root}/{bucket}/{key}`.
///
/// Public URLs are built from `public_base_url`; the API serves `root` at
/// that prefix when this provider is active.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(bucket)?;
        validate_key(key)?;
        Ok(self.root.join(bucket).join(key))
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let size_bytes = bytes.len();
        tokio::fs::write(&path, bytes).await?;

        tracing::debug!(path = %path.display(), size_bytes, "Stored object on local disk");

        Ok(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            public_url: self.public_url(bucket, key),
            size_bytes,
        })
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let path = self.object_path(bucket, key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        join_url(&self.public_base_url, &[bucket, key])
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
