//! Store error types for boxd-db.
//!
//! Mutating operations surface these to the caller; the read-only
//! aggregates (`has_liked`, `like_count`, the top-list getters) swallow
//! them to safe defaults instead.

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// No current user when an identity-bound operation was attempted.
    #[error("Not logged in")]
    Unauthenticated,

    /// Like requested for a review the user already likes.
    #[error("Review {review_id} is already liked")]
    AlreadyLiked { review_id: String },

    /// Unlike requested for a review the user has not liked.
    #[error("Review {review_id} is not liked")]
    NotLiked { review_id: String },

    /// Mutation of an entity owned by a different user.
    #[error("{id} is not owned by the current user")]
    NotOwner { id: String },

    /// Data failed validation (rating range, empty titles, avatar size).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid state encountered (e.g., duplicate list entry).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The underlying remote store call failed.
    #[error("Remote store error: {0}")]
    Remote(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
