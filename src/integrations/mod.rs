// src/integrations/mod.rs
//
// External Integrations Module

pub mod backend;

pub use backend::client::{parse_content_range_total, BackendClient};
