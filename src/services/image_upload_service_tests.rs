// src/services/image_upload_service_tests.rs
//
// Image upload tests
//
// INVARIANTS TESTED:
// - A URL is returned only for a file that was stored
// - Batch results keep input order and drop failures
// - Every upload gets a fresh storage key
// - An empty batch never touches storage

#[cfg(test)]
mod upload_tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::Barrier;

    use crate::domain::{ImageFile, StorageKey};
    use crate::error::{AppError, AppResult};
    use crate::events::{EventBus, MAX_EVENT_LOG};
    use crate::repositories::{ImageStorage, MockImageStorage};
    use crate::services::ImageUploadService;

    /// In-memory storage that rejects a configured set of file names
    #[derive(Default)]
    struct FakeStorage {
        failing: HashSet<String>,
        stored: Mutex<Vec<(String, String)>>,
        calls: Mutex<usize>,
    }

    impl FakeStorage {
        fn failing(names: &[&str]) -> Self {
            Self {
                failing: names.iter().map(|n| n.to_string()).collect(),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }

        /// Storage key -> original file name
        fn names_by_key(&self) -> HashMap<String, String> {
            self.stored.lock().unwrap().iter().cloned().collect()
        }
    }

    #[async_trait]
    impl ImageStorage for FakeStorage {
        async fn store(&self, key: StorageKey, file: ImageFile) -> AppResult<()> {
            *self.calls.lock().unwrap() += 1;

            if self.failing.contains(&file.file_name) {
                return Err(AppError::Backend {
                    status: 413,
                    message: "Payload too large".to_string(),
                });
            }

            self.stored
                .lock()
                .unwrap()
                .push((key.into_inner(), file.file_name));
            Ok(())
        }

        fn public_url(&self, key: &StorageKey) -> String {
            format!("https://cdn.test/pet-images/{}", key)
        }
    }

    fn image(name: &str) -> ImageFile {
        ImageFile::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0])
    }

    fn service(storage: Arc<FakeStorage>) -> (ImageUploadService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (ImageUploadService::new(storage, Arc::clone(&bus)), bus)
    }

    fn key_of(url: &str) -> String {
        url.rsplit('/').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_upload_one_returns_public_url_with_extension() {
        let storage = Arc::new(FakeStorage::default());
        let (uploader, bus) = service(Arc::clone(&storage));

        let url = uploader.upload_one(image("photo.jpg")).await.unwrap();

        assert!(url.starts_with("https://cdn.test/pet-images/"));
        assert!(url.ends_with(".jpg"));
        assert_eq!(storage.names_by_key()[&key_of(&url)], "photo.jpg");
        assert_eq!(bus.get_event_log()[0].event_type, "ImageUploaded");
    }

    #[tokio::test]
    async fn test_upload_one_returns_none_when_storage_rejects() {
        let storage = Arc::new(FakeStorage::failing(&["photo.jpg"]));
        let (uploader, bus) = service(Arc::clone(&storage));

        assert_eq!(uploader.upload_one(image("photo.jpg")).await, None);
        assert_eq!(storage.calls(), 1);
        assert_eq!(bus.get_event_log()[0].event_type, "ImageUploadFailed");
    }

    #[tokio::test]
    async fn test_upload_one_with_mock_storage_never_asks_for_url_on_failure() {
        let mut storage = MockImageStorage::new();
        storage
            .expect_store()
            .times(1)
            .returning(|_, _| Err(AppError::Other("network down".to_string())));
        storage.expect_public_url().never();

        let uploader = ImageUploadService::new(Arc::new(storage), Arc::new(EventBus::new()));
        assert_eq!(uploader.upload_one(image("photo.jpg")).await, None);
    }

    #[tokio::test]
    async fn test_invalid_name_is_not_sent_to_storage() {
        let storage = Arc::new(FakeStorage::default());
        let (uploader, bus) = service(Arc::clone(&storage));

        let nested = ImageFile::new("../photo.jpg", "image/jpeg", vec![1, 2, 3]);
        assert_eq!(uploader.upload_one(nested).await, None);
        assert_eq!(storage.calls(), 0);
        assert_eq!(bus.get_event_log()[0].event_type, "ImageUploadFailed");
    }

    #[tokio::test]
    async fn test_zero_byte_file_is_stored() {
        let storage = Arc::new(FakeStorage::default());
        let (uploader, _) = service(Arc::clone(&storage));

        let empty = ImageFile::new("photo.jpg", "image/jpeg", Vec::new());
        let url = uploader.upload_one(empty).await.unwrap();

        assert!(url.ends_with(".jpg"));
        assert_eq!(storage.calls(), 1);

        let urls = uploader
            .upload_many(vec![image("a.jpg"), ImageFile::new("b.jpg", "image/jpeg", Vec::new())])
            .await;
        assert_eq!(urls.len(), 2);
    }

    #[tokio::test]
    async fn test_event_log_stays_bounded_across_many_uploads() {
        let storage = Arc::new(FakeStorage::default());
        let (uploader, bus) = service(storage);

        for _ in 0..MAX_EVENT_LOG * 2 {
            uploader.upload_one(image("photo.jpg")).await;
        }

        assert_eq!(bus.get_event_log().len(), MAX_EVENT_LOG);
    }

    #[tokio::test]
    async fn test_repeated_uploads_use_different_keys() {
        let storage = Arc::new(FakeStorage::default());
        let (uploader, _) = service(Arc::clone(&storage));

        let first = uploader.upload_one(image("photo.jpg")).await.unwrap();
        let second = uploader.upload_one(image("photo.jpg")).await.unwrap();

        assert_ne!(key_of(&first), key_of(&second));
        assert_eq!(storage.names_by_key().len(), 2);
    }

    #[tokio::test]
    async fn test_upload_many_drops_failures_and_keeps_order() {
        let storage = Arc::new(FakeStorage::failing(&["b.jpg"]));
        let (uploader, bus) = service(Arc::clone(&storage));

        let urls = uploader
            .upload_many(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")])
            .await;

        assert_eq!(urls.len(), 2);
        let names_by_key = storage.names_by_key();
        let names: Vec<&str> = urls
            .iter()
            .map(|url| names_by_key[&key_of(url)].as_str())
            .collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
        assert_eq!(storage.calls(), 3);

        let batch = bus
            .get_event_log()
            .into_iter()
            .filter(|e| e.event_type == "ImageBatchUploaded")
            .count();
        assert_eq!(batch, 1);
    }

    #[tokio::test]
    async fn test_upload_many_detailed_reports_each_input() {
        let storage = Arc::new(FakeStorage::failing(&["b.jpg"]));
        let (uploader, _) = service(storage);

        let results = uploader
            .upload_many_detailed(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")])
            .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_some());
        assert!(results[1].is_none());
        assert!(results[2].is_some());
    }

    #[tokio::test]
    async fn test_upload_many_empty_never_calls_storage() {
        let storage = Arc::new(FakeStorage::default());
        let (uploader, bus) = service(Arc::clone(&storage));

        assert!(uploader.upload_many(Vec::new()).await.is_empty());
        assert_eq!(storage.calls(), 0);
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_upload_many_all_failing_returns_empty() {
        let storage = Arc::new(FakeStorage::failing(&["a.jpg", "b.jpg"]));
        let (uploader, _) = service(storage);

        let urls = uploader.upload_many(vec![image("a.jpg"), image("b.jpg")]).await;
        assert!(urls.is_empty());
    }

    /// Storage whose writes only finish once every upload has started
    struct RendezvousStorage {
        barrier: Barrier,
    }

    #[async_trait]
    impl ImageStorage for RendezvousStorage {
        async fn store(&self, _key: StorageKey, _file: ImageFile) -> AppResult<()> {
            self.barrier.wait().await;
            Ok(())
        }

        fn public_url(&self, key: &StorageKey) -> String {
            format!("https://cdn.test/{}", key)
        }
    }

    #[tokio::test]
    async fn test_upload_many_runs_uploads_concurrently() {
        let storage = RendezvousStorage {
            barrier: Barrier::new(3),
        };
        let uploader = ImageUploadService::new(Arc::new(storage), Arc::new(EventBus::new()));

        let urls = tokio::time::timeout(
            Duration::from_secs(5),
            uploader.upload_many(vec![image("a.png"), image("b.png"), image("c.png")]),
        )
        .await
        .expect("uploads were run one after another");

        assert_eq!(urls.len(), 3);
        assert!(urls.iter().all(|u| u.ends_with(".png")));
    }

    #[test]
    fn test_collect_images_skips_non_images() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"jpeg").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"notes").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("c.png"), b"png").unwrap();

        let (uploader, _) = service(Arc::new(FakeStorage::default()));
        let images = uploader.collect_images(dir.path()).unwrap();

        let names: Vec<&str> = images.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.png"]);
        assert_eq!(images[1].content_type, "image/png");
    }

    #[test]
    fn test_collect_images_requires_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jpg");
        std::fs::write(&file, b"jpeg").unwrap();

        let (uploader, _) = service(Arc::new(FakeStorage::default()));
        assert!(uploader.collect_images(&dir.path().join("missing")).is_err());
        assert!(uploader.collect_images(&file).is_err());
    }
}
