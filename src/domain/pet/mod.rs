//! Pet records live in the hosted record store. The client only needs
//! their lifecycle status, used to filter aggregate counts.

pub mod entity;
pub use entity::{PetFilter, PetStatus};
