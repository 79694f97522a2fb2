//! Review repository — CRUD with owner checks.

use chrono::Utc;

use boxd_core::entities::Review;
use boxd_core::enums::TargetKind;
use boxd_core::ids::PREFIX_REVIEW;

use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_enum};
use crate::service::BoxdService;
use crate::updates::ReviewUpdate;

fn row_to_review(row: &libsql::Row) -> Result<Review, DatabaseError> {
    Ok(Review {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        target_kind: parse_enum(&row.get::<String>(2)?)?,
        title: row.get::<String>(3)?,
        artist: row.get::<String>(4)?,
        body: row.get::<String>(5)?,
        rating: u8::try_from(row.get::<i64>(6)?)
            .map_err(|e| DatabaseError::Query(format!("rating out of range: {e}")))?,
        likes_count: u64::try_from(row.get::<i64>(7)?).unwrap_or(0),
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

const REVIEW_COLUMNS: &str =
    "id, user_id, target_kind, title, artist, body, rating, likes_count, created_at, updated_at";

fn validate_rating(rating: u8) -> Result<(), DatabaseError> {
    if rating > Review::MAX_RATING {
        return Err(DatabaseError::Validation(format!(
            "rating must be 0-{}, got {rating}",
            Review::MAX_RATING
        )));
    }
    Ok(())
}

impl BoxdService {
    /// Create a review owned by the current user. `likes_count` starts
    /// at zero.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user; `Validation` for an
    /// empty title or a rating above 5.
    pub async fn create_review(
        &self,
        target_kind: TargetKind,
        title: &str,
        artist: &str,
        body: &str,
        rating: u8,
    ) -> Result<Review, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        if title.trim().is_empty() {
            return Err(DatabaseError::Validation(
                "review title must not be empty".into(),
            ));
        }
        validate_rating(rating)?;

        let id = self.db().generate_id(PREFIX_REVIEW).await?;
        let now = Utc::now();

        self.db()
            .execute_with(
                "INSERT INTO reviews (id, user_id, target_kind, title, artist, body, rating, likes_count, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8, ?9)",
                || {
                    libsql::params![
                        id.as_str(),
                        user_id.as_str(),
                        target_kind.as_str(),
                        title,
                        artist,
                        body,
                        i64::from(rating),
                        now.to_rfc3339(),
                        now.to_rfc3339()
                    ]
                },
            )
            .await?;

        Ok(Review {
            id,
            user_id,
            target_kind,
            title: title.to_string(),
            artist: artist.to_string(),
            body: body.to_string(),
            rating,
            likes_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Fetch a review by ID.
    ///
    /// # Errors
    ///
    /// `NoResult` when the ID matches nothing.
    pub async fn get_review(&self, id: &str) -> Result<Review, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_review(&row)
    }

    /// All reviews from every user, newest first.
    ///
    /// # Errors
    ///
    /// `Remote` when the query fails.
    pub async fn list_reviews(&self, limit: u32) -> Result<Vec<Review>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {REVIEW_COLUMNS} FROM reviews
                     ORDER BY created_at DESC LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    /// The current user's reviews, newest first.
    ///
    /// # Errors
    ///
    /// `Unauthenticated` without a session user.
    pub async fn list_my_reviews(&self, limit: u32) -> Result<Vec<Review>, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT {REVIEW_COLUMNS} FROM reviews WHERE user_id = ?1
                     ORDER BY created_at DESC LIMIT ?2"
                ),
                libsql::params![user_id.as_str(), i64::from(limit)],
            )
            .await?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }
        Ok(reviews)
    }

    /// Apply a partial update to a review owned by the current user.
    ///
    /// # Errors
    ///
    /// `NotOwner` when the review belongs to someone else; `Validation`
    /// for a bad rating or empty title.
    pub async fn update_review(
        &self,
        review_id: &str,
        update: ReviewUpdate,
    ) -> Result<Review, DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        let existing = self.get_review(review_id).await?;
        if existing.user_id != user_id {
            return Err(DatabaseError::NotOwner {
                id: review_id.to_string(),
            });
        }
        if update.is_empty() {
            return Ok(existing);
        }

        if let Some(rating) = update.rating {
            validate_rating(rating)?;
        }
        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(DatabaseError::Validation(
                    "review title must not be empty".into(),
                ));
            }
        }

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.as_str().into());
            idx += 1;
        }
        if let Some(ref artist) = update.artist {
            sets.push(format!("artist = ?{idx}"));
            params.push(artist.as_str().into());
            idx += 1;
        }
        if let Some(ref body) = update.body {
            sets.push(format!("body = ?{idx}"));
            params.push(body.as_str().into());
            idx += 1;
        }
        if let Some(rating) = update.rating {
            sets.push(format!("rating = ?{idx}"));
            params.push(i64::from(rating).into());
            idx += 1;
        }
        if let Some(kind) = update.target_kind {
            sets.push(format!("target_kind = ?{idx}"));
            params.push(kind.as_str().into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(review_id.into());
        let sql = format!(
            "UPDATE reviews SET {} WHERE id = ?{idx}",
            sets.join(", ")
        );
        self.db()
            .execute_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;

        self.get_review(review_id).await
    }

    /// Delete a review owned by the current user, along with its like
    /// rows.
    ///
    /// # Errors
    ///
    /// `NotOwner` when the review belongs to someone else; `NoResult`
    /// when it does not exist.
    pub async fn delete_review(&self, review_id: &str) -> Result<(), DatabaseError> {
        let user_id = self.require_user()?.user_id.clone();
        let existing = self.get_review(review_id).await?;
        if existing.user_id != user_id {
            return Err(DatabaseError::NotOwner {
                id: review_id.to_string(),
            });
        }

        self.db()
            .execute_with("DELETE FROM likes WHERE review_id = ?1", || [review_id])
            .await?;
        self.db()
            .execute_with("DELETE FROM reviews WHERE id = ?1", || [review_id])
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use boxd_core::enums::TargetKind;
    use pretty_assertions::assert_eq;

    use crate::error::DatabaseError;
    use crate::test_support::helpers::{bob, test_service};
    use crate::updates::ReviewUpdateBuilder;

    #[tokio::test]
    async fn create_review_roundtrip() {
        let svc = test_service().await;

        let review = svc
            .create_review(
                TargetKind::Album,
                "In Rainbows",
                "Radiohead",
                "Their warmest record.",
                5,
            )
            .await
            .unwrap();

        assert!(review.id.starts_with("rev-"));
        assert_eq!(review.user_id, "user-alice");
        assert_eq!(review.likes_count, 0);

        let fetched = svc.get_review(&review.id).await.unwrap();
        assert_eq!(fetched.title, "In Rainbows");
        assert_eq!(fetched.target_kind, TargetKind::Album);
        assert_eq!(fetched.rating, 5);
    }

    #[tokio::test]
    async fn create_review_rejects_bad_input() {
        let svc = test_service().await;

        let err = svc
            .create_review(TargetKind::Song, "  ", "", "", 3)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));

        let err = svc
            .create_review(TargetKind::Song, "Karma Police", "", "", 6)
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(_)));
    }

    #[tokio::test]
    async fn rating_zero_is_allowed() {
        // text-only reviews carry rating 0
        let svc = test_service().await;
        let review = svc
            .create_review(TargetKind::Song, "Dreams", "Fleetwood Mac", "no stars yet", 0)
            .await
            .unwrap();
        assert_eq!(review.rating, 0);
    }

    #[tokio::test]
    async fn list_reviews_includes_other_users() {
        let mut svc = test_service().await;
        svc.create_review(TargetKind::Album, "Blue", "Joni Mitchell", "", 5)
            .await
            .unwrap();

        svc.set_identity(Some(bob()));
        svc.create_review(TargetKind::Album, "Harvest", "Neil Young", "", 4)
            .await
            .unwrap();

        let all = svc.list_reviews(10).await.unwrap();
        assert_eq!(all.len(), 2);

        let mine = svc.list_my_reviews(10).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Harvest");
    }

    #[tokio::test]
    async fn update_review_partial() {
        let svc = test_service().await;
        let review = svc
            .create_review(TargetKind::Album, "OK Computer", "Radiohead", "good", 4)
            .await
            .unwrap();

        let update = ReviewUpdateBuilder::new().rating(5).body("great").build();
        let updated = svc.update_review(&review.id, update).await.unwrap();

        assert_eq!(updated.rating, 5);
        assert_eq!(updated.body, "great");
        assert_eq!(updated.title, "OK Computer");
    }

    #[tokio::test]
    async fn empty_update_is_a_noop() {
        let svc = test_service().await;
        let review = svc
            .create_review(TargetKind::Album, "Aja", "Steely Dan", "", 5)
            .await
            .unwrap();

        let updated = svc
            .update_review(&review.id, ReviewUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(updated, review);
    }

    #[tokio::test]
    async fn update_foreign_review_fails() {
        let mut svc = test_service().await;
        let review = svc
            .create_review(TargetKind::Album, "Blue", "Joni Mitchell", "", 5)
            .await
            .unwrap();

        svc.set_identity(Some(bob()));
        let err = svc
            .update_review(&review.id, ReviewUpdateBuilder::new().rating(1).build())
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::NotOwner { .. }));
    }

    #[tokio::test]
    async fn delete_review_removes_likes() {
        let mut svc = test_service().await;
        let review = svc
            .create_review(TargetKind::Album, "Deja Vu", "CSNY", "", 4)
            .await
            .unwrap();

        svc.set_identity(Some(bob()));
        svc.like_review(&review.id).await.unwrap();

        svc.set_identity(Some(crate::test_support::helpers::alice()));
        svc.delete_review(&review.id).await.unwrap();

        assert!(matches!(
            svc.get_review(&review.id).await,
            Err(DatabaseError::NoResult)
        ));
        // like rows are gone with the review
        assert_eq!(svc.like_count(&review.id).await, 0);
    }

    #[tokio::test]
    async fn delete_foreign_review_fails() {
        let mut svc = test_service().await;
        let review = svc
            .create_review(TargetKind::Album, "Blue", "Joni Mitchell", "", 5)
            .await
            .unwrap();

        svc.set_identity(Some(bob()));
        let err = svc.delete_review(&review.id).await.unwrap_err();
        assert!(matches!(err, DatabaseError::NotOwner { .. }));
    }
}
