// src/application/state.rs

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::BackendClient;
use crate::repositories::{
    BackendImageStorage, BackendPetRepository, ImageStorage, PetRepository,
};
use crate::services::{
    AccountService, ImageUploadService, PetService, ShareService, StatisticsService,
};

/// Application state shared by every command.
/// All fields are Arc-wrapped for sharing across tasks.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub statistics_service: Arc<StatisticsService>,
    pub image_upload_service: Arc<ImageUploadService>,
    pub pet_service: Arc<PetService>,
    pub share_service: Arc<ShareService>,
    pub account_service: AccountService,
}

impl AppState {
    /// Wire the backend client, repositories and services from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let client = Arc::new(BackendClient::new(config)?);

        // 2. REPOSITORIES
        let pet_repo: Arc<dyn PetRepository> = Arc::new(BackendPetRepository::new(
            Arc::clone(&client),
            config.pets_table.clone(),
        ));
        let image_storage: Arc<dyn ImageStorage> = Arc::new(BackendImageStorage::new(
            Arc::clone(&client),
            config.bucket.clone(),
        ));

        Self::with_repositories(config, pet_repo, image_storage, event_bus)
    }

    /// Build services over the given repositories
    pub fn with_repositories(
        config: &Config,
        pet_repo: Arc<dyn PetRepository>,
        image_storage: Arc<dyn ImageStorage>,
        event_bus: Arc<EventBus>,
    ) -> AppResult<Self> {
        // 3. SERVICES
        let statistics_service = Arc::new(StatisticsService::new(
            Arc::clone(&pet_repo),
            Arc::clone(&event_bus),
        ));
        let image_upload_service = Arc::new(ImageUploadService::new(
            image_storage,
            Arc::clone(&event_bus),
        ));
        let pet_service = Arc::new(PetService::new(pet_repo, Arc::clone(&event_bus)));
        let share_service = Arc::new(ShareService::new(&config.site_url)?);

        Ok(Self {
            event_bus,
            statistics_service,
            image_upload_service,
            pet_service,
            share_service,
            account_service: AccountService::new(),
        })
    }
}
