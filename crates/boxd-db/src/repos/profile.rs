//! Profile repository — lazy creation, top-5 lists, avatar storage.

use chrono::Utc;

use boxd_core::entities::{Profile, TopEntry};
use boxd_core::ids::PREFIX_PROFILE;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_list};
use crate::service::BoxdService;

fn row_to_profile(row: &libsql::Row) -> Result<Profile, DatabaseError> {
    Ok(Profile {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        username: row.get::<String>(2)?,
        top_albums: parse_json_list(&row.get::<String>(3)?),
        top_songs: parse_json_list(&row.get::<String>(4)?),
        theme_color: row.get::<String>(5)?,
        avatar: row.get::<String>(6)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

const PROFILE_COLUMNS: &str =
    "id, user_id, username, top_albums, top_songs, theme_color, avatar, created_at, updated_at";

/// Drop blank entries and cap at the top-list length.
fn normalize_top_entries(entries: Vec<TopEntry>) -> Vec<TopEntry> {
    entries
        .into_iter()
        .filter(|e| !e.is_blank())
        .take(Profile::TOP_LIST_LEN)
        .collect()
}

impl BoxdService {
    /// Fetch the current user's profile, creating it on first access.
    ///
    /// A fresh profile takes its username from the email local part, the
    /// default theme color, and empty top lists.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user; `Remote` when a store
    /// call fails.
    pub async fn get_or_create_profile(&self) -> Result<Profile, DatabaseError> {
        let user = self.require_user()?.clone();

        if let Some(profile) = self.find_profile(&user.user_id).await? {
            return Ok(profile);
        }

        let id = self.db().generate_id(PREFIX_PROFILE).await?;
        let username = user
            .email
            .split('@')
            .next()
            .unwrap_or(user.user_id.as_str())
            .to_string();
        let now = Utc::now();

        // Another process may have created the row since the lookup; the
        // user_id UNIQUE constraint makes the insert lose silently and the
        // re-read below return the winner.
        self.db()
            .execute_with(
                "INSERT OR IGNORE INTO profiles (id, user_id, username, top_albums, top_songs, theme_color, avatar, created_at, updated_at)
                 VALUES (?1, ?2, ?3, '[]', '[]', ?4, '', ?5, ?6)",
                || {
                    libsql::params![
                        id.as_str(),
                        user.user_id.as_str(),
                        username.as_str(),
                        Profile::DEFAULT_THEME,
                        now.to_rfc3339(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;

        self.find_profile(&user.user_id)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// The current user's top albums, or an empty list when anonymous or
    /// on store failure. Backs read-only display.
    pub async fn top_albums(&self) -> Vec<TopEntry> {
        self.top_list("top_albums").await
    }

    /// The current user's top songs, with the same degrading semantics
    /// as [`BoxdService::top_albums`].
    pub async fn top_songs(&self) -> Vec<TopEntry> {
        self.top_list("top_songs").await
    }

    /// Replace the current user's top albums. Blank entries are dropped
    /// and the list is truncated to five.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user.
    pub async fn set_top_albums(
        &self,
        entries: Vec<TopEntry>,
    ) -> Result<Vec<TopEntry>, DatabaseError> {
        self.set_top_list("top_albums", entries).await
    }

    /// Replace the current user's top songs. Same normalization as
    /// [`BoxdService::set_top_albums`].
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user.
    pub async fn set_top_songs(
        &self,
        entries: Vec<TopEntry>,
    ) -> Result<Vec<TopEntry>, DatabaseError> {
        self.set_top_list("top_songs", entries).await
    }

    /// Change the current user's display name.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name; `Unauthenticated` without a
    /// session user.
    pub async fn set_username(&self, username: &str) -> Result<Profile, DatabaseError> {
        if username.trim().is_empty() {
            return Err(DatabaseError::Validation(
                "username must not be empty".into(),
            ));
        }
        let profile = self.get_or_create_profile().await?;
        self.db()
            .execute_with(
                "UPDATE profiles SET username = ?1, updated_at = ?2 WHERE id = ?3",
                || libsql::params![username, Utc::now().to_rfc3339(), profile.id.as_str()],
            )
            .await?;
        self.get_or_create_profile().await
    }

    /// Change the current user's theme color.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user.
    pub async fn set_theme_color(&self, color: &str) -> Result<Profile, DatabaseError> {
        let profile = self.get_or_create_profile().await?;
        self.db()
            .execute_with(
                "UPDATE profiles SET theme_color = ?1, updated_at = ?2 WHERE id = ?3",
                || libsql::params![color, Utc::now().to_rfc3339(), profile.id.as_str()],
            )
            .await?;
        self.get_or_create_profile().await
    }

    /// Store a base64 avatar string on the current user's profile.
    ///
    /// # Errors
    ///
    /// `Validation` when the string exceeds the stored-length cap;
    /// `Unauthenticated` without a session user.
    pub async fn set_avatar(&self, avatar: &str) -> Result<Profile, DatabaseError> {
        if avatar.len() > Profile::AVATAR_MAX_CHARS {
            return Err(DatabaseError::Validation(format!(
                "avatar exceeds {} characters ({}); compress the image first",
                Profile::AVATAR_MAX_CHARS,
                avatar.len()
            )));
        }
        let profile = self.get_or_create_profile().await?;
        self.db()
            .execute_with(
                "UPDATE profiles SET avatar = ?1, updated_at = ?2 WHERE id = ?3",
                || libsql::params![avatar, Utc::now().to_rfc3339(), profile.id.as_str()],
            )
            .await?;
        self.get_or_create_profile().await
    }

    /// Remove the current user's avatar.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user.
    pub async fn clear_avatar(&self) -> Result<Profile, DatabaseError> {
        self.set_avatar("").await
    }

    /// The stored avatar data string. Empty when unset, anonymous, or on
    /// store failure. Backs read-only display.
    pub async fn avatar(&self) -> String {
        if self.current_user().is_none() {
            return String::new();
        }
        match self.get_or_create_profile().await {
            Ok(profile) => profile.avatar,
            Err(error) => {
                tracing::warn!(%error, "avatar fetch failed; showing empty");
                String::new()
            }
        }
    }

    pub(crate) async fn find_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<Profile>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
                [user_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_profile(&row)?)),
            None => Ok(None),
        }
    }

    async fn top_list(&self, column: &str) -> Vec<TopEntry> {
        if self.current_user().is_none() {
            return Vec::new();
        }
        match self.get_or_create_profile().await {
            Ok(profile) => match column {
                "top_albums" => profile.top_albums,
                _ => profile.top_songs,
            },
            Err(error) => {
                tracing::warn!(%column, %error, "top list fetch failed; showing empty");
                Vec::new()
            }
        }
    }

    async fn set_top_list(
        &self,
        column: &str,
        entries: Vec<TopEntry>,
    ) -> Result<Vec<TopEntry>, DatabaseError> {
        let profile = self.get_or_create_profile().await?;
        let entries = normalize_top_entries(entries);
        let json = serde_json::to_string(&entries)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize top list: {e}")))?;
        self.db()
            .execute_with(
                &format!("UPDATE profiles SET {column} = ?1, updated_at = ?2 WHERE id = ?3"),
                || {
                    libsql::params![
                        json.as_str(),
                        Utc::now().to_rfc3339(),
                        profile.id.as_str()
                    ]
                },
            )
            .await?;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use boxd_core::entities::{Profile, TopEntry};
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{anon_service, bob, test_service};

    fn entry(title: &str, artist: &str) -> TopEntry {
        TopEntry {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }

    #[tokio::test]
    async fn profile_created_lazily_with_defaults() {
        let svc = test_service().await;

        let profile = svc.get_or_create_profile().await.unwrap();
        assert!(profile.id.starts_with("prf-"));
        assert_eq!(profile.user_id, "user-alice");
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.theme_color, Profile::DEFAULT_THEME);
        assert!(profile.top_albums.is_empty());
        assert!(profile.avatar.is_empty());

        // second call returns the same row, not a new one
        let again = svc.get_or_create_profile().await.unwrap();
        assert_eq!(again.id, profile.id);
    }

    #[tokio::test]
    async fn profiles_are_per_user() {
        let mut svc = test_service().await;
        let alice_profile = svc.get_or_create_profile().await.unwrap();

        svc.set_identity(Some(bob()));
        let bob_profile = svc.get_or_create_profile().await.unwrap();
        assert_ne!(alice_profile.id, bob_profile.id);
        assert_eq!(bob_profile.username, "bob");
    }

    #[tokio::test]
    async fn top_lists_truncate_and_drop_blanks() {
        let svc = test_service().await;

        let entries = vec![
            entry("Blue", "Joni Mitchell"),
            entry("", ""),
            entry("Harvest", "Neil Young"),
            entry("Aja", "Steely Dan"),
            entry("Rumours", "Fleetwood Mac"),
            entry("In Rainbows", "Radiohead"),
            entry("OK Computer", "Radiohead"),
        ];
        let saved = svc.set_top_albums(entries).await.unwrap();
        assert_eq!(saved.len(), Profile::TOP_LIST_LEN);
        assert_eq!(saved[0].title, "Blue");
        assert_eq!(saved[4].title, "In Rainbows");

        let loaded = svc.top_albums().await;
        assert_eq!(loaded, saved);
        // songs list is independent
        assert!(svc.top_songs().await.is_empty());
    }

    #[tokio::test]
    async fn anonymous_top_lists_are_empty() {
        let svc = anon_service().await;
        assert!(svc.top_albums().await.is_empty());
        assert!(svc.top_songs().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_top_list_degrades_to_empty() {
        let svc = test_service().await;
        let profile = svc.get_or_create_profile().await.unwrap();

        svc.db()
            .execute(
                "UPDATE profiles SET top_songs = '{broken' WHERE id = ?1",
                [profile.id.as_str()],
            )
            .await
            .unwrap();

        assert!(svc.top_songs().await.is_empty());
    }

    #[tokio::test]
    async fn set_username_rejects_empty() {
        let svc = test_service().await;
        let err = svc.set_username("   ").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let profile = svc.set_username("songbird").await.unwrap();
        assert_eq!(profile.username, "songbird");
    }

    #[tokio::test]
    async fn avatar_set_cap_and_clear() {
        let svc = test_service().await;

        let profile = svc.set_avatar("data:image/webp;base64,AAAA").await.unwrap();
        assert_eq!(profile.avatar, "data:image/webp;base64,AAAA");

        let oversized = "x".repeat(Profile::AVATAR_MAX_CHARS + 1);
        let err = svc.set_avatar(&oversized).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let profile = svc.clear_avatar().await.unwrap();
        assert!(profile.avatar.is_empty());
    }

    #[tokio::test]
    async fn avatar_getter_degrades_for_anonymous() {
        let svc = anon_service().await;
        assert!(svc.avatar().await.is_empty());

        let svc = test_service().await;
        svc.set_avatar("data:image/png;base64,BBBB").await.unwrap();
        assert_eq!(svc.avatar().await, "data:image/png;base64,BBBB");
    }

    #[tokio::test]
    async fn theme_color_updates() {
        let svc = test_service().await;
        let profile = svc.set_theme_color("#282828").await.unwrap();
        assert_eq!(profile.theme_color, "#282828");
    }

    #[tokio::test]
    async fn anonymous_profile_access_fails() {
        let svc = anon_service().await;
        assert!(matches!(
            svc.get_or_create_profile().await,
            Err(DatabaseError::Unauthenticated)
        ));
        assert!(matches!(
            svc.set_top_albums(vec![]).await,
            Err(DatabaseError::Unauthenticated)
        ));
    }
}
