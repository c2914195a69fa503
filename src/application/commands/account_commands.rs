// src/application/commands/account_commands.rs

use crate::application::{dto::*, state::AppState};

/// Where to send a user right after signing in
pub async fn post_login_redirect(
    role: Option<String>,
    state: &AppState,
) -> Result<RedirectDto, String> {
    let path = state.account_service.redirect_for_raw(role.as_deref());

    Ok(RedirectDto {
        role,
        path: path.to_string(),
    })
}
