// src/application/commands/share_commands.rs

use crate::application::{
    dto::*,
    error_handling::{ErrorResponse, ToErrorResponse},
    state::AppState,
};
use crate::domain::ShareKind;
use crate::services::ShareRequest;

/// Build the share payload and fallback links for a detail page
pub async fn share_item(dto: ShareRequestDto, state: &AppState) -> Result<ShareDto, String> {
    let kind = dto
        .kind
        .parse::<ShareKind>()
        .map_err(|e| ErrorResponse::validation(e.to_string()).to_json())?;

    let content = state
        .share_service
        .share(ShareRequest {
            kind,
            id: dto.id,
            title: dto.title,
        })
        .to_error_response()?;

    Ok(ShareDto::from(content))
}
