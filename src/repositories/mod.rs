// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers over the hosted backend
// - NO business logic
// - NO event emission
// - NO cross-repository calls

pub mod image_storage;
pub mod pet_repository;

pub use image_storage::{BackendImageStorage, ImageStorage};
pub use pet_repository::{BackendPetRepository, PetRepository};

#[cfg(test)]
pub use image_storage::MockImageStorage;
#[cfg(test)]
pub use pet_repository::MockPetRepository;
