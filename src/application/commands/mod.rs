// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the UI/CLI and services
// - Commands accept DTOs, return DTOs
// - Errors leave as JSON-encoded ErrorResponse strings
// - Commands NEVER contain business logic

pub mod account_commands;
pub mod pet_commands;
pub mod share_commands;
pub mod statistics_commands;
pub mod upload_commands;

pub use account_commands::*;
pub use pet_commands::*;
pub use share_commands::*;
pub use statistics_commands::*;
pub use upload_commands::*;
