//! Hosted storage REST API provider.
//!
//! Talks to the bucket/object endpoints of a backend-as-a-service storage
//! API:
//!
//! | Operation  | Request                                            |
//! |------------|----------------------------------------------------|
//! | upload     | `POST {base}/storage/v1/object/{bucket}/{key}`     |
//! | delete     | `DELETE {base}/storage/v1/object/{bucket}/{key}`   |
//! | public URL | `{base}/storage/v1/object/public/{bucket}/{key}`   |

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::{join_url, validate_key, ObjectStorage, StorageError, StoredObject};

/// HTTP request timeout for a single storage call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Path prefix of the storage API under the service base URL.
const OBJECT_PATH: &str = "storage/v1/object";

/// Storage provider backed by a hosted storage REST API.
pub struct HttpStorage {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpStorage {
    /// Create a provider with a pre-configured HTTP client.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn object_url(&self, bucket: &str, key: &str) -> Result<String, StorageError> {
        validate_key(bucket)?;
        validate_key(key)?;
        Ok(join_url(&self.base_url, &[OBJECT_PATH, bucket, key]))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StorageError::HttpStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ObjectStorage for HttpStorage {
    async fn upload(
        &self,
        bucket: &str,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        let url = self.object_url(bucket, key)?;
        let size_bytes = bytes.len();

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("apikey", &self.api_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;
        Self::check(response).await?;

        tracing::debug!(bucket, key, size_bytes, "Uploaded object to storage service");

        Ok(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            public_url: self.public_url(bucket, key),
            size_bytes,
        })
    }

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let url = self.object_url(bucket, key)?;
        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header("apikey", &self.api_key)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        Self::check(response).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        join_url(&self.base_url, &[OBJECT_PATH, "public", bucket, key])
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
