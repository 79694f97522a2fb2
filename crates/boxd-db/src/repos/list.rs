//! List repository — named user lists of album and song titles.

use chrono::Utc;

use boxd_core::entities::MusicList;
use boxd_core::ids::PREFIX_LIST;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_json_list};
use crate::service::BoxdService;

fn row_to_list(row: &libsql::Row) -> Result<MusicList, DatabaseError> {
    Ok(MusicList {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        albums: parse_json_list(&row.get::<String>(3)?),
        songs: parse_json_list(&row.get::<String>(4)?),
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

const LIST_COLUMNS: &str = "id, user_id, name, albums, songs, created_at, updated_at";

fn validate_list_name(name: &str) -> Result<(), DatabaseError> {
    if name.trim().is_empty() {
        return Err(DatabaseError::Validation(
            "list name must not be empty".into(),
        ));
    }
    Ok(())
}

impl BoxdService {
    /// Create an empty list for the current user.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty name; `InvalidState` when the user
    /// already has a list with this name; `Unauthenticated` without a
    /// session user.
    pub async fn create_list(&self, name: &str) -> Result<MusicList, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        validate_list_name(name)?;

        if self.find_list(&user_id, name).await?.is_some() {
            return Err(DatabaseError::InvalidState(format!(
                "list '{name}' already exists"
            )));
        }

        let id = self.db().generate_id(PREFIX_LIST).await?;
        let now = Utc::now();
        self.db()
            .execute_with(
                "INSERT INTO lists (id, user_id, name, albums, songs, created_at, updated_at)
                 VALUES (?1, ?2, ?3, '[]', '[]', ?4, ?5)",
                || {
                    libsql::params![
                        id.as_str(),
                        user_id.as_str(),
                        name,
                        now.to_rfc3339(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;

        Ok(MusicList {
            id,
            user_id,
            name: name.to_string(),
            albums: Vec::new(),
            songs: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch one of the current user's lists by name.
    ///
    /// # Errors
    ///
    /// `NoResult` when no such list exists; `Unauthenticated` without a
    /// session user.
    pub async fn get_list(&self, name: &str) -> Result<MusicList, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        self.find_list(&user_id, name)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// All of the current user's lists, alphabetical by name.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user.
    pub async fn my_lists(&self) -> Result<Vec<MusicList>, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {LIST_COLUMNS} FROM lists WHERE user_id = ?1 ORDER BY name"
                ),
                [user_id.as_str()],
            )
            .await?;

        let mut lists = Vec::new();
        while let Some(row) = rows.next().await? {
            lists.push(row_to_list(&row)?);
        }
        Ok(lists)
    }

    /// Add an album title to the named list, creating the list if needed.
    ///
    /// # Errors
    ///
    /// `Validation` for an empty title or name; `InvalidState` when the
    /// title is already in this list; `Unauthenticated` without a
    /// session user.
    pub async fn add_album_to_list(
        &self,
        name: &str,
        title: &str,
    ) -> Result<MusicList, DatabaseError> {
        self.add_entry(name, title, "albums").await
    }

    /// Add a song title to the named list. Same semantics as
    /// [`BoxdService::add_album_to_list`].
    ///
    /// # Errors
    ///
    /// Same as [`BoxdService::add_album_to_list`].
    pub async fn add_song_to_list(
        &self,
        name: &str,
        title: &str,
    ) -> Result<MusicList, DatabaseError> {
        self.add_entry(name, title, "songs").await
    }

    /// Remove an album title from the named list.
    ///
    /// # Errors
    ///
    /// `NoResult` when the list does not exist; `InvalidState` when the
    /// title is not in it.
    pub async fn remove_album_from_list(
        &self,
        name: &str,
        title: &str,
    ) -> Result<MusicList, DatabaseError> {
        self.remove_entry(name, title, "albums").await
    }

    /// Remove a song title from the named list.
    ///
    /// # Errors
    ///
    /// Same as [`BoxdService::remove_album_from_list`].
    pub async fn remove_song_from_list(
        &self,
        name: &str,
        title: &str,
    ) -> Result<MusicList, DatabaseError> {
        self.remove_entry(name, title, "songs").await
    }

    /// Delete one of the current user's lists by name.
    ///
    /// # Errors
    ///
    /// `NoResult` when no such list exists; `Unauthenticated` without a
    /// session user.
    pub async fn delete_list(&self, name: &str) -> Result<(), DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        let deleted = self
            .db()
            .execute_with(
                "DELETE FROM lists WHERE user_id = ?1 AND name = ?2",
                || libsql::params![user_id.as_str(), name],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    async fn find_list(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<MusicList>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {LIST_COLUMNS} FROM lists WHERE user_id = ?1 AND name = ?2"),
                libsql::params![user_id, name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_list(&row)?)),
            None => Ok(None),
        }
    }

    async fn add_entry(
        &self,
        name: &str,
        title: &str,
        column: &str,
    ) -> Result<MusicList, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        validate_list_name(name)?;
        if title.trim().is_empty() {
            return Err(DatabaseError::Validation(
                "entry title must not be empty".into(),
            ));
        }

        let list = match self.find_list(&user_id, name).await? {
            Some(list) => list,
            None => self.create_list(name).await?,
        };

        let mut entries = if column == "albums" {
            list.albums.clone()
        } else {
            list.songs.clone()
        };
        if entries.iter().any(|e| e == title) {
            return Err(DatabaseError::InvalidState(format!(
                "'{title}' is already in list '{name}'"
            )));
        }
        entries.push(title.to_string());

        self.write_entries(&list.id, column, &entries).await?;
        self.get_list(name).await
    }

    async fn remove_entry(
        &self,
        name: &str,
        title: &str,
        column: &str,
    ) -> Result<MusicList, DatabaseError> {
        let list = self.get_list(name).await?;
        let entries = if column == "albums" {
            &list.albums
        } else {
            &list.songs
        };
        if !entries.iter().any(|e| e == title) {
            return Err(DatabaseError::InvalidState(format!(
                "'{title}' is not in list '{name}'"
            )));
        }
        let remaining: Vec<String> = entries.iter().filter(|e| *e != title).cloned().collect();

        self.write_entries(&list.id, column, &remaining).await?;
        self.get_list(name).await
    }

    async fn write_entries(
        &self,
        list_id: &str,
        column: &str,
        entries: &[String],
    ) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(entries)
            .map_err(|e| DatabaseError::Query(format!("Failed to serialize list: {e}")))?;
        self.db()
            .execute_with(
                &format!("UPDATE lists SET {column} = ?1, updated_at = ?2 WHERE id = ?3"),
                || libsql::params![json.as_str(), Utc::now().to_rfc3339(), list_id],
            )
            .await?;
        Ok(())
    }
}
