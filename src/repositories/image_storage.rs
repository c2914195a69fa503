// src/repositories/image_storage.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{ImageFile, StorageKey};
use crate::error::AppResult;
use crate::integrations::BackendClient;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Store `file` under `key`
    async fn store(&self, key: StorageKey, file: ImageFile) -> AppResult<()>;

    /// Public URL serving the object stored under `key`
    fn public_url(&self, key: &StorageKey) -> String;
}

pub struct BackendImageStorage {
    client: Arc<BackendClient>,
    bucket: String,
}

impl BackendImageStorage {
    pub fn new(client: Arc<BackendClient>, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ImageStorage for BackendImageStorage {
    async fn store(&self, key: StorageKey, file: ImageFile) -> AppResult<()> {
        self.client
            .upload_object(&self.bucket, key.as_str(), &file.content_type, file.bytes)
            .await
    }

    fn public_url(&self, key: &StorageKey) -> String {
        self.client.public_object_url(&self.bucket, key.as_str())
    }
}
