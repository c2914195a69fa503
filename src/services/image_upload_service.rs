// src/services/image_upload_service.rs
use std::path::Path;
use std::sync::Arc;

use crate::domain::upload::content_type_for;
use crate::domain::{validate_image_file, ImageFile, StorageKey, UploadResult};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ImageBatchUploaded, ImageUploadFailed, ImageUploaded};
use crate::repositories::ImageStorage;

/// Stores pet images and hands back their public URLs.
///
/// Uploads never return an error: a file that could not be stored yields
/// no URL and is logged.
pub struct ImageUploadService {
    storage: Arc<dyn ImageStorage>,
    event_bus: Arc<EventBus>,
}

impl ImageUploadService {
    pub fn new(storage: Arc<dyn ImageStorage>, event_bus: Arc<EventBus>) -> Self {
        Self { storage, event_bus }
    }

    /// Store one file under a fresh key and return its public URL
    pub async fn upload_one(&self, file: ImageFile) -> UploadResult {
        upload_file(Arc::clone(&self.storage), Arc::clone(&self.event_bus), file).await
    }

    /// Upload every file concurrently and return the URLs of those that
    /// succeeded, in input order. Failed uploads are dropped.
    pub async fn upload_many(&self, files: Vec<ImageFile>) -> Vec<String> {
        self.upload_many_detailed(files)
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Like `upload_many`, but keeps one result per input so callers can
    /// see which files failed.
    pub async fn upload_many_detailed(&self, files: Vec<ImageFile>) -> Vec<UploadResult> {
        if files.is_empty() {
            return Vec::new();
        }

        let requested = files.len();
        let mut handles = Vec::with_capacity(requested);

        for file in files {
            let storage = Arc::clone(&self.storage);
            let event_bus = Arc::clone(&self.event_bus);
            handles.push(tokio::spawn(upload_file(storage, event_bus, file)));
        }

        // Awaiting in spawn order keeps results aligned with the input
        let mut results = Vec::with_capacity(requested);
        for handle in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    log::error!("Upload task did not complete: {}", e);
                    None
                }
            };
            results.push(result);
        }

        let succeeded = results.iter().filter(|r| r.is_some()).count();
        if succeeded < requested {
            log::warn!("{} of {} image uploads failed", requested - succeeded, requested);
        }
        self.event_bus.emit(ImageBatchUploaded::new(requested, succeeded));

        results
    }

    /// Read every image file below `directory`, sorted by file name.
    ///
    /// Non-image files are ignored; unreadable images are skipped with a
    /// warning.
    pub fn collect_images(&self, directory: &Path) -> AppResult<Vec<ImageFile>> {
        if !directory.exists() {
            return Err(AppError::Other("Directory does not exist".to_string()));
        }
        if !directory.is_dir() {
            return Err(AppError::Other("Path is not a directory".to_string()));
        }

        let mut images = Vec::new();

        for entry in walkdir::WalkDir::new(directory)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e: Result<walkdir::DirEntry, walkdir::Error>| e.ok())
        {
            if !entry.file_type().is_file() || !is_image(entry.path()) {
                continue;
            }

            match ImageFile::from_path(entry.path()) {
                Ok(file) => images.push(file),
                Err(e) => log::warn!("Skipping {}: {}", entry.path().display(), e),
            }
        }

        log::info!("Found {} images in {}", images.len(), directory.display());
        Ok(images)
    }
}

fn is_image(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| content_type_for(name).starts_with("image/"))
        .unwrap_or(false)
}

async fn upload_file(
    storage: Arc<dyn ImageStorage>,
    event_bus: Arc<EventBus>,
    file: ImageFile,
) -> UploadResult {
    let file_name = file.file_name.clone();

    if let Err(e) = validate_image_file(&file) {
        log::warn!("Rejected {}: {}", file_name, e);
        event_bus.emit(ImageUploadFailed::new(file_name, e.to_string()));
        return None;
    }

    let size = file.size();
    let key = StorageKey::generate(&file);

    match storage.store(key.clone(), file).await {
        Ok(()) => {
            let url = storage.public_url(&key);
            log::info!("Uploaded {} as {}", file_name, key);
            event_bus.emit(ImageUploaded::new(key.into_inner(), url.clone(), size));
            Some(url)
        }
        Err(e) => {
            log::error!("Failed to upload {}: {}", file_name, e);
            event_bus.emit(ImageUploadFailed::new(file_name, e.to_string()));
            None
        }
    }
}
