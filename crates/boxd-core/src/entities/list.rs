use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named, user-owned list of album and song titles.
///
/// Entries are unique within one list; the same title may appear in any
/// number of different lists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MusicList {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub albums: Vec<String>,
    pub songs: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
