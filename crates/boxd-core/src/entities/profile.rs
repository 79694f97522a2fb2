use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One slot in a top-5 list. Both fields may be empty; a fully empty
/// entry is dropped on save.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

impl TopEntry {
    /// True when neither title nor artist is filled in.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.artist.is_empty()
    }
}

/// A user's catalog profile, created lazily on first access.
///
/// `top_albums` and `top_songs` are persisted as JSON text columns and
/// hold at most [`Profile::TOP_LIST_LEN`] entries.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub top_albums: Vec<TopEntry>,
    pub top_songs: Vec<TopEntry>,
    pub theme_color: String,
    /// Base64 data string, empty when unset. Capped at `AVATAR_MAX_CHARS`.
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Maximum entries in a top list; excess entries are truncated on save.
    pub const TOP_LIST_LEN: usize = 5;

    /// Maximum stored avatar length, matching the backing store's text
    /// column limit the original application compressed images to fit.
    pub const AVATAR_MAX_CHARS: usize = 50_000;

    /// Default theme color for freshly created profiles.
    pub const DEFAULT_THEME: &'static str = "#1a1a1a";
}
