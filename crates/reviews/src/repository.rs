use std::sync::Arc;

use chrono::{DateTime, Utc};

use revsync_core::{DomainResult, ReviewId, StoreId};

use crate::{NewReview, Rating, Review, ReviewContent};

/// Storage for review records and their store association.
///
/// Every method is one atomic unit: a review and its store association are
/// written and removed together, so readers never observe one without the
/// other. Unknown review ids yield `NotFound`.
pub trait ReviewRepository: Send + Sync {
    /// Assign a fresh id and persist the review under its store.
    fn insert(&self, review: NewReview) -> DomainResult<Review>;

    fn get(&self, review_id: ReviewId) -> DomainResult<Review>;

    /// Overwrite content, rating and timestamp. Returns the previous record.
    fn update(
        &self,
        review_id: ReviewId,
        content: ReviewContent,
        rating: Rating,
        written_at: DateTime<Utc>,
    ) -> DomainResult<Review>;

    /// Remove the review and its store association. Returns the removed record.
    fn remove(&self, review_id: ReviewId) -> DomainResult<Review>;

    /// Contents of the reviews owned by `store_id`, in ascending review id order.
    ///
    /// Store existence is not checked here; callers go through the directory.
    fn contents_for_store(&self, store_id: StoreId) -> DomainResult<Vec<String>>;
}

impl<R> ReviewRepository for Arc<R>
where
    R: ReviewRepository + ?Sized,
{
    fn insert(&self, review: NewReview) -> DomainResult<Review> {
        (**self).insert(review)
    }

    fn get(&self, review_id: ReviewId) -> DomainResult<Review> {
        (**self).get(review_id)
    }

    fn update(
        &self,
        review_id: ReviewId,
        content: ReviewContent,
        rating: Rating,
        written_at: DateTime<Utc>,
    ) -> DomainResult<Review> {
        (**self).update(review_id, content, rating, written_at)
    }

    fn remove(&self, review_id: ReviewId) -> DomainResult<Review> {
        (**self).remove(review_id)
    }

    fn contents_for_store(&self, store_id: StoreId) -> DomainResult<Vec<String>> {
        (**self).contents_for_store(store_id)
    }
}
