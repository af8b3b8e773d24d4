//! Multipart upload handling shared by poster and clip endpoints.

use axum::extract::Multipart;
use moviehub_core::types::DbId;
use moviehub_core::upload::{
    content_type_for, inspect_image, is_image_extension, object_key, validate_upload, UploadKind,
};
use moviehub_storage::StoredObject;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A file pulled out of a multipart form.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A file that has been validated and written to object storage.
#[derive(Debug)]
pub struct StoredUpload {
    pub object: StoredObject,
    pub content_type: &'static str,
    pub filename: String,
}

/// Read the required `file` field from a multipart form.
pub async fn read_file_field(mut multipart: Multipart) -> AppResult<UploadedFile> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::BadRequest("The 'file' field has no filename".into()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file = Some(UploadedFile {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))
}

/// Validate `file` for `kind` and write it under `{prefix}/{owner_id}/`.
pub async fn store_upload(
    state: &AppState,
    kind: UploadKind,
    prefix: &str,
    owner_id: DbId,
    file: UploadedFile,
) -> AppResult<StoredUpload> {
    let ext = validate_upload(
        kind,
        &file.filename,
        file.bytes.len(),
        state.config.max_upload_bytes,
    )?;

    if is_image_extension(&ext) {
        let info = inspect_image(&file.bytes)?;
        tracing::debug!(width = info.width, height = info.height, "Inspected uploaded image");
    }

    let key = object_key(prefix, owner_id, &ext);
    let content_type = content_type_for(&ext);
    let object = state
        .storage
        .upload(kind.bucket(), &key, file.bytes, content_type)
        .await?;

    tracing::info!(
        bucket = %object.bucket,
        key = %object.key,
        size_bytes = object.size_bytes,
        "Stored upload"
    );

    Ok(StoredUpload {
        object,
        content_type,
        filename: file.filename,
    })
}
