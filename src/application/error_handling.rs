// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses (the toast payload)
// - Provides consistent error format for the UI
// - Never exposes backend internals in the message
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Resource not found (404)
    NotFound,

    /// Invalid input/validation error (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Backend rejected the request (4xx/5xx)
    Backend,

    /// Backend unreachable (502)
    ExternalService,

    /// Missing or invalid configuration
    Configuration,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::not_found("Resource"),

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Backend { status, message } => {
                log::error!("Backend error {}: {}", status, message);

                let text = if status == 401 || status == 403 {
                    "You are not allowed to do that"
                } else {
                    "The server could not complete the request"
                };

                Self {
                    success: false,
                    error_type: ErrorType::Backend,
                    message: text.to_string(),
                    details: None,
                }
            }

            AppError::Http(http_error) => {
                log::error!("HTTP error: {:?}", http_error);

                Self {
                    success: false,
                    error_type: ErrorType::ExternalService,
                    message: "Could not reach the server".to_string(),
                    details: None,
                }
            }

            AppError::Config(message) => Self {
                success: false,
                error_type: ErrorType::Configuration,
                message: "Application is not configured".to_string(),
                details: Some(message),
            },

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: Some(io_error.to_string()),
                }
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    /// Create not found error
    pub fn not_found(resource: &str) -> Self {
        Self {
            success: false,
            error_type: ErrorType::NotFound,
            message: format!("{} not found", resource),
            details: None,
        }
    }

    /// JSON string handed back to the caller
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "Internal error".to_string())
    }
}

/// Helper trait to convert Results to ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| ErrorResponse::from_app_error(e).to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_not_found_error() {
        let error = ErrorResponse::from_app_error(AppError::NotFound);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, "Resource not found");
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::validation("Invalid input".to_string());
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn test_forbidden_backend_error() {
        let error = ErrorResponse::from_app_error(AppError::Backend {
            status: 403,
            message: "new row violates row-level security policy".to_string(),
        });
        assert_eq!(error.error_type, ErrorType::Backend);
        assert_eq!(error.message, "You are not allowed to do that");
        assert!(error.details.is_none());
        assert!(!error.to_json().contains("row-level security"));
    }

    #[test]
    fn test_domain_error_carries_details() {
        let error = ErrorResponse::from_app_error(AppError::Domain(
            DomainError::UnknownRole("admin".to_string()),
        ));
        assert_eq!(error.error_type, ErrorType::DomainError);
        assert_eq!(error.details.as_deref(), Some("Unknown user role: admin"));
    }

    #[test]
    fn test_to_error_response_serializes() {
        let result: Result<(), AppError> = Err(AppError::Config("missing key".to_string()));
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("configuration"));
        assert!(json.contains("missing key"));
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Pet");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Pet not found"));
    }
}
