// src/services/pet_service.rs
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppResult;
use crate::events::{EventBus, PetDeleted};
use crate::repositories::PetRepository;

pub struct PetService {
    pet_repo: Arc<dyn PetRepository>,
    event_bus: Arc<EventBus>,
}

impl PetService {
    pub fn new(pet_repo: Arc<dyn PetRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            pet_repo,
            event_bus,
        }
    }

    /// Remove a pet record. Errors reach the caller so the UI can show them.
    pub async fn delete_pet(&self, pet_id: Uuid) -> AppResult<()> {
        self.pet_repo.delete_pet(pet_id).await.map_err(|e| {
            log::error!("Failed to delete pet {}: {}", pet_id, e);
            e
        })?;

        log::info!("Deleted pet {}", pet_id);
        self.event_bus.emit(PetDeleted::new(pet_id));
        Ok(())
    }
}
