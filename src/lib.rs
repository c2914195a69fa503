// src/lib.rs
// PawHub - Pet adoption and lost-and-found client core
//
// Architecture:
// - Domain-centric: pet status, statistics and upload rules live in domain
// - Repositories: thin mappers over the hosted backend
// - Services: orchestration, logging and events
// - Application Layer: commands + DTOs at the UI/CLI boundary

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod integrations;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_image_file,
    DomainError,
    // Upload
    ImageFile,
    // Pet
    PetFilter,
    PetStatus,
    // Sharing
    ShareKind,
    ShareLinks,
    SharePayload,
    // Statistics
    StatSummary,
    StatsState,
    StorageKey,
    UploadResult,
    // Account
    UserRole,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::Config;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DomainEvent, EventBus, EventLogEntry, ImageBatchUploaded,
    ImageUploadFailed, ImageUploaded, PetDeleted, StatisticsLoadFailed, StatisticsLoaded,
};

// ============================================================================
// PUBLIC API - Repositories & Integrations
// ============================================================================

pub use integrations::BackendClient;
pub use repositories::{BackendImageStorage, BackendPetRepository, ImageStorage, PetRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AccountService, ImageUploadService, PetService, ShareContent, ShareRequest, ShareService,
    StatisticsService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;
