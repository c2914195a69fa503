// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod account;
pub mod pet;
pub mod share;
pub mod statistics;
pub mod upload;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Pet Domain
pub use pet::{PetFilter, PetStatus};

// Statistics Domain (Derived Data)
pub use statistics::{StatSummary, StatsState};

// Upload Domain
pub use upload::{validate_image_file, ImageFile, StorageKey, UploadResult};

// Account
pub use account::UserRole;

// Sharing
pub use share::{ShareKind, ShareLinks, SharePayload};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown pet status: {0}")]
    UnknownStatus(String),

    #[error("Unknown user role: {0}")]
    UnknownRole(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
