//! Turso transient error classification.
//!
//! Transient cloud infrastructure errors (node recycling, shared lock
//! contention during provisioning) surface as HTTP 400 responses from the
//! Hrana API and resolve on their own within seconds. `BoxdDb::execute_with`
//! retries individual statements against this predicate; whole operations
//! are never re-run — a failed like/unlike is reported and the count cache
//! self-heals on the next toggle.
//!
//! Local-only databases never encounter these errors; the retry path is
//! gated on `BoxdDb::is_synced_replica`.

use std::time::Duration;

/// Suggested backoff parameters for callers that retry transient errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(2),
        }
    }
}

/// Detect transient Turso infrastructure errors.
///
/// The predicate is intentionally narrow to avoid retrying genuine SQL
/// or constraint errors.
#[must_use]
pub fn is_transient_remote_error(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("unable to acquire shared lock")
        || msg.contains("deletion must be in progress")
}
