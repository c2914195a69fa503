// src/application/commands/pet_commands.rs

use uuid::Uuid;

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};

/// Delete a pet; the error string is what the UI shows in its toast
pub async fn delete_pet(dto: DeletePetDto, state: &AppState) -> Result<(), String> {
    let pet_id = Uuid::parse_str(dto.pet_id.trim())
        .map_err(|e| ErrorResponse::validation(format!("Invalid pet id: {}", e)).to_json())?;

    state.pet_service.delete_pet(pet_id).await.to_error_response()
}
