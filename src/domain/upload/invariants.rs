use super::entity::ImageFile;
use crate::domain::{DomainError, DomainResult};

/// Validates all ImageFile invariants
pub fn validate_image_file(file: &ImageFile) -> DomainResult<()> {
    validate_name(file)
}

/// Name must be a bare, non-empty file name
fn validate_name(file: &ImageFile) -> DomainResult<()> {
    if file.file_name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "File name cannot be empty".to_string(),
        ));
    }

    if file.file_name.contains('/') || file.file_name.contains('\\') {
        return Err(DomainError::InvariantViolation(format!(
            "File name must not contain path separators: {}",
            file.file_name
        )));
    }

    Ok(())
}
