//! CLI response types returned as JSON by `boxd` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{MusicList, Profile, Review, TopEntry};

/// Response from `boxd review create` / `boxd review update`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewResponse {
    pub review: Review,
}

/// Response from `boxd review list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
    pub total: u32,
}

/// Response from `boxd review like` / `unlike` / `likes`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LikeStatusResponse {
    pub review_id: String,
    /// Whether the current user has liked the review after the operation.
    pub liked: bool,
    pub like_count: u64,
}

/// Response from `boxd top albums|songs show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopListResponse {
    pub kind: String,
    pub entries: Vec<TopEntry>,
}

/// Response from `boxd profile show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Response from `boxd list show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ListsResponse {
    pub lists: Vec<MusicList>,
}
