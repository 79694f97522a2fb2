//! Session identity configuration.
//!
//! The hosted backend's login flow is outside this workspace; whatever
//! mints the session hands the resulting identity to boxd through this
//! section (`BOXD_SESSION__USER_ID` / `BOXD_SESSION__EMAIL` or the TOML
//! equivalents). An empty section means "not logged in" — read-only
//! aggregate queries still work, identity-bound operations fail.

use boxd_core::identity::CurrentUser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Backend user ID of the logged-in user.
    #[serde(default)]
    pub user_id: String,

    /// Account email of the logged-in user.
    #[serde(default)]
    pub email: String,
}

impl SessionConfig {
    /// The configured identity, or `None` when no user is logged in.
    #[must_use]
    pub fn current_user(&self) -> Option<CurrentUser> {
        if self.user_id.is_empty() {
            return None;
        }
        Some(CurrentUser {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
        })
    }
}
