use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user's endorsement of a review, unique per (review, user).
///
/// Like rows are the source of truth for like state; the count stored on
/// the review is derived from them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Like {
    pub id: String,
    pub review_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
