// src/services/account_service.rs
use crate::domain::UserRole;

/// Route used when the role is missing or unrecognised
pub const DEFAULT_REDIRECT: &str = "/dashboard";

/// Post-login routing by account role
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountService;

impl AccountService {
    pub fn new() -> Self {
        Self
    }

    pub fn redirect_for(&self, role: UserRole) -> &'static str {
        role.dashboard_path()
    }

    /// Redirect for a raw role string as stored in the user's profile
    pub fn redirect_for_raw(&self, role: Option<&str>) -> &'static str {
        match role.map(str::parse::<UserRole>) {
            Some(Ok(role)) => self.redirect_for(role),
            Some(Err(e)) => {
                log::warn!("{}, redirecting to {}", e, DEFAULT_REDIRECT);
                DEFAULT_REDIRECT
            }
            None => DEFAULT_REDIRECT,
        }
    }
}
