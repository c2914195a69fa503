// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the UI/CLI and the services
// - Translates between DTOs and domain types
// - Converts errors into user-facing responses

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
