// src/services/share_service.rs
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, ShareKind, ShareLinks, SharePayload};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct ShareRequest {
    pub kind: ShareKind,
    pub id: String,
    pub title: String,
}

/// Everything a share button needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareContent {
    pub payload: SharePayload,
    pub links: ShareLinks,
}

/// Builds share payloads for detail pages of the public site
pub struct ShareService {
    site_url: Url,
}

impl ShareService {
    pub fn new(site_url: &str) -> AppResult<Self> {
        let site_url = Url::parse(site_url)
            .map_err(|e| AppError::Domain(DomainError::InvalidUrl(format!("{}: {}", site_url, e))))?;

        if site_url.cannot_be_a_base() {
            return Err(AppError::Domain(DomainError::InvalidUrl(site_url.to_string())));
        }

        Ok(Self { site_url })
    }

    pub fn share(&self, request: ShareRequest) -> AppResult<ShareContent> {
        if request.id.trim().is_empty() {
            return Err(AppError::Domain(DomainError::InvariantViolation(
                "Shared item id cannot be empty".to_string(),
            )));
        }

        let url = self.page_url(request.kind, request.id.trim())?;
        let payload = SharePayload::new(request.kind, request.title.trim(), url);
        let links = ShareLinks::for_payload(&payload)?;

        Ok(ShareContent { payload, links })
    }

    /// Public URL of a detail page, e.g. `<site>/pets/<id>`
    pub fn page_url(&self, kind: ShareKind, id: &str) -> AppResult<String> {
        let mut url = self.site_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Domain(DomainError::InvalidUrl(self.site_url.to_string())))?
            .pop_if_empty()
            .push(kind.path_segment())
            .push(id);
        Ok(url.into())
    }
}
