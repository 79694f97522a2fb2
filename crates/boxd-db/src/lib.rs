//! # boxd-db
//!
//! libSQL store operations for the boxd catalog: profiles, reviews,
//! likes, and lists.
//!
//! The "remote store" is a libSQL database — a plain local file in
//! standalone mode, or a Turso Cloud embedded replica in synced mode.
//! There are no cross-statement transactions around the like-toggle
//! write-back; see `repos::like` for the consistency model.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use std::time::Duration;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all boxd store operations.
///
/// Wraps a libSQL database and connection, provides ID generation, and
/// runs migrations on open. Repo methods live on `service::BoxdService`.
pub struct BoxdDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    synced: bool,
}

impl BoxdDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let boxd_db = Self {
            db,
            conn,
            synced: false,
        };
        boxd_db.init_connection().await?;
        Ok(boxd_db)
    }

    /// Open a Turso embedded replica synced against a remote database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened, the first
    /// sync fails, or migrations fail.
    pub async fn open_synced(
        replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        sync_interval_secs: u64,
        read_your_writes: bool,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote_replica(
            replica_path,
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .sync_interval(Duration::from_secs(sync_interval_secs))
        .read_your_writes(read_your_writes)
        .build()
        .await?;
        db.sync().await?;
        let conn = db.connect()?;
        let boxd_db = Self {
            db,
            conn,
            synced: true,
        };
        boxd_db.init_connection().await?;
        Ok(boxd_db)
    }

    async fn init_connection(&self) -> Result<(), DatabaseError> {
        // Foreign keys must be enabled per-connection in SQLite
        self.conn
            .execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;
        self.run_migrations().await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Returns whether this handle is backed by a synced Turso replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.synced
    }

    /// Push local writes to and pull remote writes from the cloud database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Remote` if the sync round fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        self.db.sync().await?;
        Ok(())
    }

    /// Execute a statement, returning the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Remote` if the statement fails.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, DatabaseError> {
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Execute a statement with automatic retry on transient Turso
    /// errors. The closure rebuilds the params for each attempt. Local
    /// databases never retry.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Remote` once attempts are exhausted or
    /// the error is not transient.
    pub async fn execute_with<P, F>(&self, sql: &str, params: F) -> Result<u64, DatabaseError>
    where
        P: libsql::params::IntoParams,
        F: Fn() -> P,
    {
        let config = retry::RetryConfig::default();
        let mut delay = config.base_delay;
        let mut attempt = 1;
        loop {
            match self.conn.execute(sql, params()).await {
                Ok(affected) => return Ok(affected),
                Err(error)
                    if self.synced
                        && attempt < config.max_attempts
                        && retry::is_transient_remote_error(&error) =>
                {
                    tracing::warn!(%error, attempt, "transient remote error; retrying");
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(config.max_delay);
                    attempt += 1;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }

    /// Run a query, returning the row cursor.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Remote` if the query fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        Ok(self.conn.query(sql, params).await?)
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rev-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends
    /// the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
