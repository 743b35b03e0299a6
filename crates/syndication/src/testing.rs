//! Small in-process fakes shared by the unit tests of this crate.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use revsync_core::{DomainError, DomainResult, OrgToken, ProductId, ReviewId, StoreId};
use revsync_reviews::{NewReview, Rating, Review, ReviewContent, ReviewRepository};
use revsync_stores::{Store, StoreDirectory};

use crate::{EdgeInsert, EdgeRepository, SyndicationEdge};

pub struct Directory(HashMap<StoreId, Store>);

impl StoreDirectory for Directory {
    fn get(&self, store_id: StoreId) -> DomainResult<Store> {
        self.0
            .get(&store_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("store {store_id}")))
    }
}

#[derive(Default)]
pub struct Edges(Mutex<BTreeSet<SyndicationEdge>>);

impl EdgeRepository for Edges {
    fn insert(&self, edge: SyndicationEdge) -> DomainResult<EdgeInsert> {
        if self.0.lock().unwrap().insert(edge) {
            Ok(EdgeInsert::Created)
        } else {
            Ok(EdgeInsert::AlreadyExists)
        }
    }

    fn remove(&self, edge: SyndicationEdge) -> DomainResult<bool> {
        Ok(self.0.lock().unwrap().remove(&edge))
    }

    fn sources_of(&self, target: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.target == target)
            .map(|e| e.source)
            .collect())
    }

    fn targets_of(&self, source: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.target)
            .collect())
    }
}

#[derive(Default)]
pub struct Reviews(Mutex<BTreeMap<ReviewId, Review>>);

impl ReviewRepository for Reviews {
    fn insert(&self, review: NewReview) -> DomainResult<Review> {
        let mut rows = self.0.lock().unwrap();
        let id = ReviewId::new(rows.keys().last().map_or(1, |k| k.get() + 1));
        let review = Review::from_new(id, review);
        rows.insert(id, review.clone());
        Ok(review)
    }

    fn get(&self, review_id: ReviewId) -> DomainResult<Review> {
        self.0
            .lock()
            .unwrap()
            .get(&review_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("review {review_id}")))
    }

    fn update(
        &self,
        review_id: ReviewId,
        content: ReviewContent,
        rating: Rating,
        written_at: DateTime<Utc>,
    ) -> DomainResult<Review> {
        let mut rows = self.0.lock().unwrap();
        let row = rows
            .get_mut(&review_id)
            .ok_or_else(|| DomainError::not_found(format!("review {review_id}")))?;
        let previous = row.clone();
        row.revise(content, rating, written_at);
        Ok(previous)
    }

    fn remove(&self, review_id: ReviewId) -> DomainResult<Review> {
        self.0
            .lock()
            .unwrap()
            .remove(&review_id)
            .ok_or_else(|| DomainError::not_found(format!("review {review_id}")))
    }

    fn contents_for_store(&self, store_id: StoreId) -> DomainResult<Vec<String>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.store_id == store_id)
            .map(|r| r.content.as_str().to_string())
            .collect())
    }
}

pub struct Fixture {
    pub directory: Arc<Directory>,
    pub edges: Arc<Edges>,
    pub reviews: Arc<Reviews>,
}

impl Fixture {
    /// Stores given as `(id, organization)` pairs.
    pub fn new(stores: &[(i64, &str)]) -> Self {
        let stores = stores
            .iter()
            .map(|&(id, org)| {
                let id = StoreId::new(id);
                (id, Store::new(id, format!("store-{id}"), OrgToken::from(org)))
            })
            .collect();
        Self {
            directory: Arc::new(Directory(stores)),
            edges: Arc::new(Edges::default()),
            reviews: Arc::new(Reviews::default()),
        }
    }

    pub fn review(&self, store_id: i64, content: &str) -> ReviewId {
        self.reviews
            .insert(NewReview {
                content: ReviewContent::parse(content).unwrap(),
                rating: Rating::new(4).unwrap(),
                store_id: StoreId::new(store_id),
                product_id: ProductId::new(1),
                written_at: Utc::now(),
            })
            .unwrap()
            .review_id
    }
}
