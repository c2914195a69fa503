use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Kind of page being shared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
    Pet,
    Clinic,
    Event,
}

impl ShareKind {
    /// Path segment of the detail page for this kind
    pub fn path_segment(&self) -> &'static str {
        match self {
            ShareKind::Pet => "pets",
            ShareKind::Clinic => "clinics",
            ShareKind::Event => "events",
        }
    }

    fn call_to_action(&self) -> &'static str {
        match self {
            ShareKind::Pet => "Help this pet find its way home",
            ShareKind::Clinic => "Check out this clinic",
            ShareKind::Event => "Join this event",
        }
    }
}

impl std::str::FromStr for ShareKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pet" => Ok(Self::Pet),
            "clinic" => Ok(Self::Clinic),
            "event" => Ok(Self::Event),
            other => Err(DomainError::InvariantViolation(format!(
                "Unknown share kind: {}",
                other
            ))),
        }
    }
}

/// What a native share sheet receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(kind: ShareKind, title: &str, url: String) -> Self {
        Self {
            title: title.to_string(),
            text: format!("{}: {}", kind.call_to_action(), title),
            url,
        }
    }
}

/// Fallback links used when no native share sheet is available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    pub whatsapp: String,
    pub facebook: String,
    pub x: String,
    pub email: String,
}

impl ShareLinks {
    pub fn for_payload(payload: &SharePayload) -> DomainResult<Self> {
        let text_with_url = format!("{} {}", payload.text, payload.url);

        Ok(Self {
            whatsapp: link("https://wa.me/", &[("text", &text_with_url)])?,
            facebook: link(
                "https://www.facebook.com/sharer/sharer.php",
                &[("u", &payload.url)],
            )?,
            x: link(
                "https://twitter.com/intent/tweet",
                &[("text", &payload.text), ("url", &payload.url)],
            )?,
            email: link(
                "mailto:",
                &[("subject", &payload.title), ("body", &text_with_url)],
            )?,
        })
    }
}

fn link(base: &str, params: &[(&str, &str)]) -> DomainResult<String> {
    Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| DomainError::InvalidUrl(format!("{}: {}", base, e)))
}
