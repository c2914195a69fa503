use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Outcome of one upload: the public URL, or nothing if storing failed
pub type UploadResult = Option<String>;

/// A binary file handed to the uploader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name, used only for its extension
    pub file_name: String,

    /// MIME type sent to object storage
    pub content_type: String,

    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, inferring its content type from the extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::Other(format!("Path has no file name: {:?}", path)))?
            .to_string();

        let bytes = std::fs::read(path)?;
        let content_type = content_type_for(&file_name).to_string();

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    /// Text after the last `.` of the file name, if any
    pub fn extension(&self) -> Option<&str> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            None
        } else {
            Some(ext)
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Object storage key: a fresh UUID v4 followed by the original extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    /// Generate a new unique key for `file`
    pub fn generate(file: &ImageFile) -> Self {
        let id = Uuid::new_v4();
        match file.extension() {
            Some(ext) => Self(format!("{}.{}", id, ext)),
            None => Self(id.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Infer a MIME type from a file name's extension
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("avif") => "image/avif",
        Some("heic") => "image/heic",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
