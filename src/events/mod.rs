// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus module and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Upload
    ImageBatchUploaded,
    ImageUploadFailed,
    ImageUploaded,
    // Pets
    PetDeleted,
    // Statistics
    StatisticsLoadFailed,
    StatisticsLoaded,
};

pub use bus::{EventBus, EventLogEntry, MAX_EVENT_LOG};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
