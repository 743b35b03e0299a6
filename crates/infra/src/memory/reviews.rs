use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use revsync_core::{DomainError, DomainResult, ReviewId, StoreId};
use revsync_reviews::{NewReview, Rating, Review, ReviewContent, ReviewRepository};

use super::poisoned;

/// Review rows plus the store → reviews index, updated together.
#[derive(Debug)]
struct ReviewTable {
    next_id: i64,
    rows: BTreeMap<ReviewId, Review>,
    by_store: HashMap<StoreId, BTreeSet<ReviewId>>,
}

impl Default for ReviewTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
            by_store: HashMap::new(),
        }
    }
}

/// In-memory review repository.
///
/// Ids are assigned from a counter starting at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    inner: RwLock<ReviewTable>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn missing(review_id: ReviewId) -> DomainError {
    DomainError::not_found(format!("review {review_id}"))
}

impl ReviewRepository for InMemoryReviewRepository {
    fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let mut table = self.inner.write().map_err(poisoned)?;

        let review_id = ReviewId::new(table.next_id);
        table.next_id += 1;

        let review = Review::from_new(review_id, review);
        table
            .by_store
            .entry(review.store_id)
            .or_default()
            .insert(review_id);
        table.rows.insert(review_id, review.clone());
        Ok(review)
    }

    fn get(&self, review_id: ReviewId) -> DomainResult<Review> {
        let table = self.inner.read().map_err(poisoned)?;
        table.rows.get(&review_id).cloned().ok_or_else(|| missing(review_id))
    }

    fn update(
        &self,
        review_id: ReviewId,
        content: ReviewContent,
        rating: Rating,
        written_at: DateTime<Utc>,
    ) -> DomainResult<Review> {
        let mut table = self.inner.write().map_err(poisoned)?;
        let row = table.rows.get_mut(&review_id).ok_or_else(|| missing(review_id))?;
        let previous = row.clone();
        row.revise(content, rating, written_at);
        Ok(previous)
    }

    fn remove(&self, review_id: ReviewId) -> DomainResult<Review> {
        let mut table = self.inner.write().map_err(poisoned)?;
        let removed = table.rows.remove(&review_id).ok_or_else(|| missing(review_id))?;

        if let Some(ids) = table.by_store.get_mut(&removed.store_id) {
            ids.remove(&review_id);
            if ids.is_empty() {
                table.by_store.remove(&removed.store_id);
            }
        }
        Ok(removed)
    }

    fn contents_for_store(&self, store_id: StoreId) -> DomainResult<Vec<String>> {
        let table = self.inner.read().map_err(poisoned)?;
        let Some(ids) = table.by_store.get(&store_id) else {
            return Ok(Vec::new());
        };

        ids.iter()
            .map(|id| {
                table
                    .rows
                    .get(id)
                    .map(|r| r.content.as_str().to_string())
                    .ok_or_else(|| DomainError::storage(format!("review index references missing review {id}")))
            })
            .collect()
    }
}
