// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain types only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{StatsState, UploadResult};
use crate::services::ShareContent;

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStatisticsDto {
    pub registered: u64,
    pub found: u64,
    pub for_adoption: u64,
    pub loading: bool,
}

impl From<StatsState> for PetStatisticsDto {
    fn from(state: StatsState) -> Self {
        Self {
            registered: state.summary.registered,
            found: state.summary.found,
            for_adoption: state.summary.for_adoption,
            loading: state.loading,
        }
    }
}

// ============================================================================
// UPLOAD DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImagesDto {
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadDirectoryDto {
    pub directory_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImagesDto {
    /// Public URLs of the stored files, in input order
    pub urls: Vec<String>,
    pub requested: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadOutcomeDto {
    pub file_name: String,
    pub url: Option<String>,
}

impl UploadOutcomeDto {
    pub fn new(file_name: String, result: UploadResult) -> Self {
        Self {
            file_name,
            url: result,
        }
    }
}

// ============================================================================
// PET DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePetDto {
    pub pet_id: String,
}

// ============================================================================
// SHARE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequestDto {
    pub kind: String,
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareDto {
    pub title: String,
    pub text: String,
    pub url: String,
    pub whatsapp: String,
    pub facebook: String,
    pub x: String,
    pub email: String,
}

impl From<ShareContent> for ShareDto {
    fn from(content: ShareContent) -> Self {
        Self {
            title: content.payload.title,
            text: content.payload.text,
            url: content.payload.url,
            whatsapp: content.links.whatsapp,
            facebook: content.links.facebook,
            x: content.links.x,
            email: content.links.email,
        }
    }
}

// ============================================================================
// ACCOUNT DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectDto {
    pub role: Option<String>,
    pub path: String,
}
