// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod account_service;
pub mod image_upload_service;
pub mod pet_service;
pub mod share_service;
pub mod statistics_service;

#[cfg(test)]
mod image_upload_service_tests;

// Re-export all services and their types
pub use account_service::AccountService;

pub use image_upload_service::ImageUploadService;

pub use pet_service::PetService;

pub use share_service::{ShareContent, ShareRequest, ShareService};

pub use statistics_service::StatisticsService;
