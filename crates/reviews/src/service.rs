//! Store-scoped review operations.
//!
//! Validation happens here, before anything reaches storage. Each operation
//! logs an audit line on success and a warning on rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use revsync_core::{DomainResult, ProductId, ReviewId, StoreId};
use revsync_stores::StoreDirectory;

use crate::{NewReview, Rating, Review, ReviewContent, ReviewRepository};

/// Command: CreateReview (unvalidated primitives from the boundary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReview {
    pub content: String,
    pub rating: i64,
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub written_at: DateTime<Utc>,
}

/// Command: UpdateReview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReview {
    pub review_id: ReviewId,
    pub content: String,
    pub rating: i64,
    pub written_at: DateTime<Utc>,
}

/// Review operations over an injected directory and repository.
#[derive(Debug, Clone)]
pub struct ReviewService<D, R> {
    directory: D,
    repository: R,
}

impl<D, R> ReviewService<D, R>
where
    D: StoreDirectory,
    R: ReviewRepository,
{
    pub fn new(directory: D, repository: R) -> Self {
        Self {
            directory,
            repository,
        }
    }

    /// Validate and persist a new review, returning its assigned id.
    ///
    /// Field rules are checked before store existence.
    pub fn create(&self, cmd: CreateReview) -> DomainResult<ReviewId> {
        let store_id = cmd.store_id;
        let checked = ReviewContent::parse(cmd.content).and_then(|content| {
            let rating = Rating::new(cmd.rating)?;
            self.directory.ensure_exists(store_id)?;
            Ok((content, rating))
        });
        let (content, rating) = match checked {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(%store_id, error = %e, "rejected review creation");
                return Err(e);
            }
        };

        let review = self.repository.insert(NewReview {
            content,
            rating,
            store_id,
            product_id: cmd.product_id,
            written_at: cmd.written_at,
        })?;

        tracing::info!(
            review_id = %review.review_id,
            store_id = %review.store_id,
            product_id = %review.product_id,
            rating = review.rating.get(),
            content = review.content.as_str(),
            written_at = %review.written_at,
            "created review"
        );

        Ok(review.review_id)
    }

    /// Overwrite content, rating and timestamp of an existing review.
    ///
    /// An unknown id is reported before field validation.
    pub fn update(&self, cmd: UpdateReview) -> DomainResult<()> {
        let review_id = cmd.review_id;
        let applied = self.repository.get(review_id).and_then(|_| {
            let content = ReviewContent::parse(cmd.content)?;
            let rating = Rating::new(cmd.rating)?;
            let previous = self
                .repository
                .update(review_id, content.clone(), rating, cmd.written_at)?;
            Ok((previous, content, rating))
        });
        let (previous, content, rating) = match applied {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(%review_id, error = %e, "rejected review update");
                return Err(e);
            }
        };

        tracing::info!(
            review_id = %review_id,
            old_content = previous.content.as_str(),
            old_rating = previous.rating.get(),
            new_content = content.as_str(),
            new_rating = rating.get(),
            written_at = %cmd.written_at,
            "updated review"
        );

        Ok(())
    }

    pub fn delete(&self, review_id: ReviewId) -> DomainResult<()> {
        let removed = match self.repository.remove(review_id) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%review_id, error = %e, "rejected review deletion");
                return Err(e);
            }
        };
        tracing::info!(
            review_id = %review_id,
            store_id = %removed.store_id,
            "deleted review"
        );
        Ok(())
    }

    pub fn get(&self, review_id: ReviewId) -> DomainResult<Review> {
        self.repository.get(review_id)
    }

    /// Contents of the store's own reviews. Empty if it has none.
    pub fn contents_for_store(&self, store_id: StoreId) -> DomainResult<Vec<String>> {
        self.directory.ensure_exists(store_id)?;
        self.repository.contents_for_store(store_id)
    }
}
