// src/repositories/pet_repository.rs

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::PetFilter;
use crate::error::AppResult;
use crate::integrations::BackendClient;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Number of pets matching `filter`
    async fn count_pets(&self, filter: PetFilter) -> AppResult<u64>;

    async fn delete_pet(&self, pet_id: Uuid) -> AppResult<()>;
}

pub struct BackendPetRepository {
    client: Arc<BackendClient>,
    table: String,
}

impl BackendPetRepository {
    pub fn new(client: Arc<BackendClient>, table: String) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl PetRepository for BackendPetRepository {
    async fn count_pets(&self, filter: PetFilter) -> AppResult<u64> {
        self.client.count(&self.table, &filter.query_pairs()).await
    }

    async fn delete_pet(&self, pet_id: Uuid) -> AppResult<()> {
        let filters = vec![("id".to_string(), format!("eq.{}", pet_id))];
        self.client.delete(&self.table, &filters).await
    }
}
