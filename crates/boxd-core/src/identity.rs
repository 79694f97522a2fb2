use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Produced by `boxd-config` (the `[session]` section), consumed by
/// `boxd-cli` and `boxd-db`. Contains only data fields — the session
/// bootstrap that mints it lives outside this workspace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CurrentUser {
    /// Backend user ID.
    pub user_id: String,
    /// Account email, for display only.
    pub email: String,
}
