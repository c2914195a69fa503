use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Lifecycle category of a pet record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PetStatus {
    /// Implicit default for any pet in the store
    #[default]
    Registered,

    /// Lost pet that has been found
    Found,

    /// Pet offered for adoption
    ForAdoption,
}

impl PetStatus {
    /// Value stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Registered => "registered",
            PetStatus::Found => "found",
            PetStatus::ForAdoption => "for-adoption",
        }
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "registered" => Ok(Self::Registered),
            "found" => Ok(Self::Found),
            "for-adoption" | "for_adoption" => Ok(Self::ForAdoption),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// Filter applied to a count query over the pets collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFilter {
    /// Every record, whatever its status
    All,

    /// Only records with the given status
    Status(PetStatus),
}

impl PetFilter {
    /// Query-string pairs understood by the record store.
    ///
    /// `All` adds no condition; a status filter becomes `status=eq.<value>`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match self {
            PetFilter::All => Vec::new(),
            PetFilter::Status(status) => {
                vec![("status".to_string(), format!("eq.{}", status.as_str()))]
            }
        }
    }
}

impl std::fmt::Display for PetFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetFilter::All => write!(f, "all"),
            PetFilter::Status(status) => write!(f, "status:{}", status),
        }
    }
}
