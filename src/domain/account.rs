use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Coarse account type attached to an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Individual pet owner or adopter
    Personal,

    /// Veterinary clinic, pet shop or other business
    Company,

    /// Shelter or rescue organisation
    Ngo,
}

impl UserRole {
    /// Route a user lands on after signing in
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Personal => "/dashboard",
            UserRole::Company => "/dashboard/company",
            UserRole::Ngo => "/dashboard/ngo",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Personal => write!(f, "personal"),
            UserRole::Company => write!(f, "company"),
            UserRole::Ngo => write!(f, "ngo"),
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Self::Personal),
            "company" => Ok(Self::Company),
            "ngo" => Ok(Self::Ngo),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}
