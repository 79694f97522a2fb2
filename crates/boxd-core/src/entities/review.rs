use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TargetKind;

/// A user's rated, textual opinion on an album or song.
///
/// `likes_count` is a denormalized cache of the review's like-row count.
/// It is recomputed from the `likes` table after every toggle, never
/// incremented in place, so a stale value converges on the next toggle.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub target_kind: TargetKind,
    pub title: String,
    pub artist: String,
    pub body: String,
    /// Star rating, 0 (unrated) through 5.
    pub rating: u8,
    pub likes_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    pub const MAX_RATING: u8 = 5;
}
