//! Like repository — toggle state and the denormalized count cache.
//!
//! Like rows are the source of truth; `reviews.likes_count` is a display
//! cache rewritten from `COUNT(*)` after every toggle, never incremented
//! in place. The like-row mutation and the count write-back are two
//! separate statements with no transaction across them: a failure in
//! between leaves the cache stale-low until the next toggle recomputes
//! it. Concurrent likers race on the write-back and the last writer
//! wins; the cache converges because every writer derives the value from
//! the rows.
//!
//! Propagation policy: `like_review`/`unlike_review` surface store
//! errors; `has_liked`/`like_count` back read-only display and degrade
//! to `false`/`0` instead.

use chrono::Utc;

use boxd_core::entities::Like;
use boxd_core::ids::PREFIX_LIKE;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::BoxdService;

fn row_to_like(row: &libsql::Row) -> Result<Like, DatabaseError> {
    Ok(Like {
        id: row.get::<String>(0)?,
        review_id: row.get::<String>(1)?,
        user_id: row.get::<String>(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl BoxdService {
    /// Whether the current user has liked the review.
    ///
    /// Returns `false` when unauthenticated or when the store query
    /// fails — this backs read-only rendering and must not throw.
    pub async fn has_liked(&self, review_id: &str) -> bool {
        let Some(user) = self.current_user() else {
            return false;
        };
        let user_id = user.user_id.clone();
        match self.find_like(review_id, &user_id).await {
            Ok(like) => like.is_some(),
            Err(error) => {
                tracing::warn!(%review_id, %error, "like lookup failed; reporting not-liked");
                false
            }
        }
    }

    /// Count of like rows for the review, from the authoritative table.
    ///
    /// Store errors degrade to `0` — a lossy fallback for display, not
    /// a crash.
    pub async fn like_count(&self, review_id: &str) -> u64 {
        match self.count_likes(review_id).await {
            Ok(count) => count,
            Err(error) => {
                tracing::warn!(%review_id, %error, "like count failed; reporting 0");
                0
            }
        }
    }

    /// Like a review as the current user and refresh the count cache.
    ///
    /// Returns the recomputed like count.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user; `AlreadyLiked` when the
    /// (review, user) pair exists; `NoResult` when the review does not;
    /// `Remote` when a store call fails.
    pub async fn like_review(&self, review_id: &str) -> Result<u64, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        self.get_review(review_id).await?;
        if self.find_like(review_id, &user_id).await?.is_some() {
            return Err(DatabaseError::AlreadyLiked {
                review_id: review_id.to_string(),
            });
        }

        let id = self.db().generate_id(PREFIX_LIKE).await?;
        let now = Utc::now();
        // OR IGNORE + affected-row check closes the insert race: losing a
        // concurrent duplicate surfaces as AlreadyLiked, not a SQL error.
        let inserted = self
            .db()
            .execute_with(
                "INSERT OR IGNORE INTO likes (id, review_id, user_id, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                || {
                    libsql::params![
                        id.as_str(),
                        review_id,
                        user_id.as_str(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;
        if inserted == 0 {
            return Err(DatabaseError::AlreadyLiked {
                review_id: review_id.to_string(),
            });
        }

        self.write_back_like_count(review_id).await
    }

    /// Remove the current user's like and refresh the count cache.
    ///
    /// Returns the recomputed like count.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user; `NotLiked` when no like
    /// row exists; `Remote` when a store call fails.
    pub async fn unlike_review(&self, review_id: &str) -> Result<u64, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        let deleted = self
            .db()
            .execute_with(
                "DELETE FROM likes WHERE review_id = ?1 AND user_id = ?2",
                || libsql::params![review_id, user_id.as_str()],
            )
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::NotLiked {
                review_id: review_id.to_string(),
            });
        }

        self.write_back_like_count(review_id).await
    }

    /// Recompute the like count from the rows and write it back to the
    /// review. An UPDATE matching zero rows means the review was deleted
    /// concurrently; the write-back becomes a no-op.
    pub(crate) async fn write_back_like_count(
        &self,
        review_id: &str,
    ) -> Result<u64, DatabaseError> {
        let count = self.count_likes(review_id).await?;
        let updated = self
            .db()
            .execute_with(
                "UPDATE reviews SET likes_count = ?1, updated_at = ?2 WHERE id = ?3",
                || {
                    libsql::params![
                        i64::try_from(count).unwrap_or(i64::MAX),
                        Utc::now().to_rfc3339(),
                        review_id
                    ]
                },
            )
            .await?;
        if updated == 0 {
            tracing::debug!(%review_id, "count write-back matched no review (deleted?)");
        }
        Ok(count)
    }

    pub(crate) async fn find_like(
        &self,
        review_id: &str,
        user_id: &str,
    ) -> Result<Option<Like>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, review_id, user_id, created_at
                 FROM likes WHERE review_id = ?1 AND user_id = ?2",
                libsql::params![review_id, user_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_like(&row)?)),
            None => Ok(None),
        }
    }

    async fn count_likes(&self, review_id: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT COUNT(*) FROM likes WHERE review_id = ?1",
                [review_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use boxd_core::enums::TargetKind;
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{anon_service, bob, test_service};

    async fn seed_review(svc: &crate::service::BoxdService) -> String {
        svc.create_review(TargetKind::Album, "Rumours", "Fleetwood Mac", "classic", 5)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn fresh_review_has_no_likes() {
        let svc = test_service().await;
        let rev = seed_review(&svc).await;

        assert_eq!(svc.like_count(&rev).await, 0);
        assert!(!svc.has_liked(&rev).await);
    }

    #[tokio::test]
    async fn like_then_query() {
        let svc = test_service().await;
        let rev = seed_review(&svc).await;

        let count = svc.like_review(&rev).await.unwrap();
        assert_eq!(count, 1);
        assert!(svc.has_liked(&rev).await);
        assert_eq!(svc.like_count(&rev).await, 1);

        // the cached column was written back too
        let review = svc.get_review(&rev).await.unwrap();
        assert_eq!(review.likes_count, 1);
    }

    #[tokio::test]
    async fn unlike_restores_previous_count() {
        let svc = test_service().await;
        let rev = seed_review(&svc).await;

        svc.like_review(&rev).await.unwrap();
        let count = svc.unlike_review(&rev).await.unwrap();
        assert_eq!(count, 0);
        assert!(!svc.has_liked(&rev).await);
        assert_eq!(svc.get_review(&rev).await.unwrap().likes_count, 0);
    }

    #[tokio::test]
    async fn double_like_fails() {
        let svc = test_service().await;
        let rev = seed_review(&svc).await;

        svc.like_review(&rev).await.unwrap();
        let err = svc.like_review(&rev).await.unwrap_err();
        assert!(matches!(err, DatabaseError::AlreadyLiked { review_id } if review_id == rev));
        assert_eq!(svc.like_count(&rev).await, 1);
    }

    #[tokio::test]
    async fn unlike_without_like_fails() {
        let svc = test_service().await;
        let rev = seed_review(&svc).await;

        let err = svc.unlike_review(&rev).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotLiked { review_id } if review_id == rev));
    }

    #[tokio::test]
    async fn like_nonexistent_review_fails() {
        let svc = test_service().await;
        let err = svc.like_review("rev-missing0").await.unwrap_err();
        assert!(matches!(err, DatabaseError::NoResult));
    }

    #[tokio::test]
    async fn two_users_like_and_one_unlikes() {
        // alice likes -> 1, bob likes -> 2, alice unlikes -> 1
        let mut svc = test_service().await;
        let rev = seed_review(&svc).await;

        assert_eq!(svc.like_review(&rev).await.unwrap(), 1);
        assert!(svc.has_liked(&rev).await);

        svc.set_identity(Some(bob()));
        assert_eq!(svc.like_review(&rev).await.unwrap(), 2);
        assert!(svc.has_liked(&rev).await);

        svc.set_identity(Some(crate::test_support::helpers::alice()));
        assert_eq!(svc.unlike_review(&rev).await.unwrap(), 1);
        assert!(!svc.has_liked(&rev).await);

        svc.set_identity(Some(bob()));
        assert!(svc.has_liked(&rev).await);
        assert_eq!(svc.get_review(&rev).await.unwrap().likes_count, 1);
    }

    #[tokio::test]
    async fn anonymous_reads_are_safe_defaults() {
        let svc = anon_service().await;
        assert!(!svc.has_liked("rev-whatever0").await);
        assert_eq!(svc.like_count("rev-whatever0").await, 0);
    }

    #[tokio::test]
    async fn anonymous_like_is_unauthenticated() {
        let mut svc = test_service().await;
        let rev = seed_review(&svc).await;

        svc.set_identity(None);
        let err = svc.like_review(&rev).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Unauthenticated));
        let err = svc.unlike_review(&rev).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Unauthenticated));
    }

    #[tokio::test]
    async fn cache_rewrites_from_rows_not_increment() {
        // Corrupt the cached column, then toggle: the write-back must
        // restore the derived value, proving recompute-from-source.
        let mut svc = test_service().await;
        let rev = seed_review(&svc).await;
        svc.like_review(&rev).await.unwrap();

        svc.db()
            .execute(
                "UPDATE reviews SET likes_count = 99 WHERE id = ?1",
                [rev.as_str()],
            )
            .await
            .unwrap();

        svc.set_identity(Some(bob()));
        let count = svc.like_review(&rev).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(svc.get_review(&rev).await.unwrap().likes_count, 2);
    }

    #[tokio::test]
    async fn write_back_after_review_delete_is_noop() {
        let svc = test_service().await;
        let rev = seed_review(&svc).await;
        svc.like_review(&rev).await.unwrap();

        // Simulate the review vanishing between the row mutation and the
        // write-back: deleting directly leaves the like row behind.
        svc.db()
            .execute("DELETE FROM reviews WHERE id = ?1", [rev.as_str()])
            .await
            .unwrap();

        let count = svc.write_back_like_count(&rev).await.unwrap();
        assert_eq!(count, 1, "rows still counted; UPDATE silently matched nothing");
    }
}
