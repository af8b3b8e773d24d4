//! Upload rules for posters and media clips.
//!
//! Extension allow-lists, size limits, object key layout, and a header-only
//! image sanity check. The bytes themselves are stored by the storage crate.

use std::io::Cursor;

use crate::error::CoreError;
use crate::types::DbId;

/// Bucket holding poster images.
pub const POSTER_BUCKET: &str = "posters";

/// Bucket holding media clips (screenshots and short videos).
pub const CLIP_BUCKET: &str = "clips";

/// Default maximum upload size (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const POSTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

const CLIP_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "mp4", "webm"];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

/// What an uploaded file will be used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Poster,
    Clip,
}

impl UploadKind {
    pub fn bucket(self) -> &'static str {
        match self {
            Self::Poster => POSTER_BUCKET,
            Self::Clip => CLIP_BUCKET,
        }
    }

    fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Poster => POSTER_EXTENSIONS,
            Self::Clip => CLIP_EXTENSIONS,
        }
    }
}

/// Dimensions read from an image header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Lower-cased extension of `filename`, or `None` if it has none.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate an upload and return its normalized extension.
pub fn validate_upload(
    kind: UploadKind,
    filename: &str,
    size_bytes: usize,
    max_bytes: usize,
) -> Result<String, CoreError> {
    if size_bytes == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size_bytes > max_bytes {
        return Err(CoreError::Validation(format!(
            "Uploaded file is {size_bytes} bytes; the limit is {max_bytes} bytes"
        )));
    }

    let allowed = kind.allowed_extensions();
    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::Validation(format!("File '{filename}' has no extension"))
    })?;
    if !allowed.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type '.{ext}'. Supported: {}",
            allowed.join(", ")
        )));
    }
    Ok(ext)
}

/// Whether files with this extension are still images (and can be inspected).
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext)
}

/// MIME type sent to object storage for an allowed extension.
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}

/// Object key for a new upload: `{prefix}/{owner_id}/{uuid}.{ext}`.
///
/// A fresh UUID per upload means re-uploading never overwrites an object a
/// client may still have cached.
pub fn object_key(prefix: &str, owner_id: DbId, ext: &str) -> String {
    format!("{prefix}/{owner_id}/{}.{ext}", uuid::Uuid::new_v4())
}

/// Read image dimensions from the header without decoding pixel data.
pub fn inspect_image(bytes: &[u8]) -> Result<ImageInfo, CoreError> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CoreError::Validation(format!("Unreadable image: {e}")))?;
    if reader.format().is_none() {
        return Err(CoreError::Validation(
            "Uploaded file is not a recognized image".into(),
        ));
    }
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| CoreError::Validation(format!("Corrupt image: {e}")))?;
    Ok(ImageInfo { width, height })
}
