// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::StatSummary;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// STATISTICS EVENTS
// ============================================================================

/// Emitted when all three counts arrived and the summary was replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub summary: StatSummary,
}

impl StatisticsLoaded {
    pub fn new(summary: StatSummary) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            summary,
        }
    }
}

domain_event!(StatisticsLoaded);

/// Emitted when a count query failed and the summary was kept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl StatisticsLoadFailed {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

domain_event!(StatisticsLoadFailed);

// ============================================================================
// UPLOAD EVENTS
// ============================================================================

/// Emitted when a file was stored and its public URL resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUploaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub storage_key: String,
    pub public_url: String,
    pub size: usize,
}

impl ImageUploaded {
    pub fn new(storage_key: String, public_url: String, size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            storage_key,
            public_url,
            size,
        }
    }
}

domain_event!(ImageUploaded);

/// Emitted when a file could not be stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUploadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub file_name: String,
    pub reason: String,
}

impl ImageUploadFailed {
    pub fn new(file_name: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            file_name,
            reason,
        }
    }
}

domain_event!(ImageUploadFailed);

/// Emitted once a batch of uploads has settled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageBatchUploaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub requested: usize,
    pub succeeded: usize,
}

impl ImageBatchUploaded {
    pub fn new(requested: usize, succeeded: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            requested,
            succeeded,
        }
    }
}

domain_event!(ImageBatchUploaded);

// ============================================================================
// PET EVENTS
// ============================================================================

/// Emitted after a pet record was removed from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pet_id: Uuid,
}

impl PetDeleted {
    pub fn new(pet_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pet_id,
        }
    }
}

domain_event!(PetDeleted);
