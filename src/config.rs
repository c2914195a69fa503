// src/config.rs
//
// Backend configuration
//
// PRINCIPLES:
// - Defaults < config file < environment
// - Validated once at startup, never mutated afterwards

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const ENV_BACKEND_URL: &str = "PAWHUB_BACKEND_URL";
pub const ENV_ANON_KEY: &str = "PAWHUB_ANON_KEY";
pub const ENV_BUCKET: &str = "PAWHUB_BUCKET";
pub const ENV_PETS_TABLE: &str = "PAWHUB_PETS_TABLE";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "PAWHUB_REQUEST_TIMEOUT_SECS";
pub const ENV_SITE_URL: &str = "PAWHUB_SITE_URL";

/// Connection settings for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend project, e.g. `https://xyz.supabase.co`
    pub backend_url: String,

    /// Public (anon) API key
    pub anon_key: String,

    /// Storage bucket that receives pet images
    pub bucket: String,

    /// Record collection holding pets
    pub pets_table: String,

    /// Transport timeout for each HTTP request
    pub request_timeout_secs: u64,

    /// Public site URL used to build share links
    pub site_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            anon_key: String::new(),
            bucket: "pet-images".to_string(),
            pets_table: "pets".to_string(),
            request_timeout_secs: 30,
            site_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default file (if present) and environment
    pub fn load() -> AppResult<Self> {
        let path = default_config_path();
        Self::load_from(path.as_deref())
    }

    /// Load configuration from an explicit file (if present) and environment
    pub fn load_from(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            Some(path) => {
                log::debug!("No configuration file at {}, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Override fields from environment lookups
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BACKEND_URL) {
            self.backend_url = v;
        }
        if let Some(v) = lookup(ENV_ANON_KEY) {
            self.anon_key = v;
        }
        if let Some(v) = lookup(ENV_BUCKET) {
            self.bucket = v;
        }
        if let Some(v) = lookup(ENV_PETS_TABLE) {
            self.pets_table = v;
        }
        if let Some(v) = lookup(ENV_SITE_URL) {
            self.site_url = v;
        }
        if let Some(v) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            self.request_timeout_secs = v.trim().parse().map_err(|e| {
                AppError::Config(format!("Invalid {}: {}", ENV_REQUEST_TIMEOUT_SECS, e))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.backend_url.trim().is_empty() {
            return Err(AppError::Config(format!(
                "Backend URL is not set (use {} or the config file)",
                ENV_BACKEND_URL
            )));
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "Backend URL must be http(s): {}",
                self.backend_url
            )));
        }
        if self.anon_key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "Anon key is not set (use {} or the config file)",
                ENV_ANON_KEY
            )));
        }
        if self.bucket.trim().is_empty() {
            return Err(AppError::Config("Storage bucket cannot be empty".to_string()));
        }
        if self.pets_table.trim().is_empty() {
            return Err(AppError::Config("Pets table cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Backend base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }
}

/// Default config file location.
/// Path structure: {CONFIG_DIR}/pawhub/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pawhub").join("config.json"))
}
