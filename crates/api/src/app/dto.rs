use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use revsync_core::{ProductId, ReviewId, StoreId};
use revsync_reviews::Review;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub review: String,
    pub rating: i64,
    pub store_id: StoreId,
    pub product_id: ProductId,
    /// Defaults to the time the request was received.
    pub request_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub review: String,
    pub rating: i64,
    pub request_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct SyndicateRequest {
    pub source_store_id: StoreId,
    pub target_store_id: StoreId,
}

// -------------------------
// Response mapping
// -------------------------

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub review: String,
    pub rating: u8,
    pub request_time: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            review_id: r.review_id,
            store_id: r.store_id,
            product_id: r.product_id,
            review: r.content.into(),
            rating: r.rating.get(),
            request_time: r.written_at,
        }
    }
}
