//! Service layer binding a database handle to a session identity.
//!
//! `BoxdService` wraps `BoxdDb` and the optional current user. All repo
//! methods are implemented as `impl BoxdService` blocks in `repos/`.
//! Identity-bound operations go through [`BoxdService::require_user`];
//! read-only aggregates check [`BoxdService::current_user`] and degrade
//! instead of failing.

use boxd_core::identity::CurrentUser;

use crate::BoxdDb;
use crate::error::DatabaseError;

/// Identity-aware store service hosting all repository methods.
pub struct BoxdService {
    db: BoxdDb,
    identity: Option<CurrentUser>,
}

impl BoxdService {
    /// Create a service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` — Path to the libSQL database file, or `":memory:"`
    ///   for tests.
    /// * `identity` — The logged-in user, or `None` for anonymous
    ///   read-only use.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<CurrentUser>,
    ) -> Result<Self, DatabaseError> {
        let db = BoxdDb::open_local(db_path).await?;
        Ok(Self { db, identity })
    }

    /// Create a service backed by a synced Turso embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened.
    pub async fn new_synced(
        replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        sync_interval_secs: u64,
        read_your_writes: bool,
        identity: Option<CurrentUser>,
    ) -> Result<Self, DatabaseError> {
        let db = BoxdDb::open_synced(
            replica_path,
            remote_url,
            auth_token,
            sync_interval_secs,
            read_your_writes,
        )
        .await?;
        Ok(Self { db, identity })
    }

    /// Create from an existing `BoxdDb` (for testing).
    #[must_use]
    pub const fn from_db(db: BoxdDb, identity: Option<CurrentUser>) -> Self {
        Self { db, identity }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &BoxdDb {
        &self.db
    }

    /// The session identity, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&CurrentUser> {
        self.identity.as_ref()
    }

    /// Replace the session identity (e.g., after login/logout).
    pub fn set_identity(&mut self, identity: Option<CurrentUser>) {
        self.identity = identity;
    }

    /// The session identity, or `Unauthenticated` for identity-bound
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unauthenticated` when no user is logged in.
    pub fn require_user(&self) -> Result<&CurrentUser, DatabaseError> {
        self.identity.as_ref().ok_or(DatabaseError::Unauthenticated)
    }

    /// Sync the underlying database with remote cloud state.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Remote` if the sync round fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        self.db.sync().await
    }

    /// Returns whether this service is backed by a synced Turso replica.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.db.is_synced_replica()
    }
}
