use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use revsync_core::{DomainError, DomainResult, Entity, ProductId, ReviewId, StoreId};

/// Longest accepted review text, in characters.
pub const MAX_CONTENT_CHARS: usize = 100;

/// Validated review text: non-empty and at most [`MAX_CONTENT_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReviewContent(String);

impl ReviewContent {
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(DomainError::invalid_argument("review content must not be empty"));
        }
        let len = raw.chars().count();
        if len > MAX_CONTENT_CHARS {
            return Err(DomainError::invalid_argument(format!(
                "review content must be at most {MAX_CONTENT_CHARS} characters (got {len})"
            )));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReviewContent {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ReviewContent> for String {
    fn from(value: ReviewContent) -> Self {
        value.0
    }
}

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn new(value: i64) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::invalid_argument(format!(
                "rating must be between {} and {} (got {value})",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(value: Rating) -> Self {
        i64::from(value.0)
    }
}

/// A validated review that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub content: ReviewContent,
    pub rating: Rating,
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub written_at: DateTime<Utc>,
}

/// A persisted review. Its id and owning store never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: ReviewId,
    pub store_id: StoreId,
    pub product_id: ProductId,
    pub content: ReviewContent,
    pub rating: Rating,
    pub written_at: DateTime<Utc>,
}

impl Review {
    /// Materialize a new review under the id assigned by storage.
    pub fn from_new(review_id: ReviewId, new: NewReview) -> Self {
        Self {
            review_id,
            store_id: new.store_id,
            product_id: new.product_id,
            content: new.content,
            rating: new.rating,
            written_at: new.written_at,
        }
    }

    /// Overwrite the mutable fields in place.
    pub fn revise(&mut self, content: ReviewContent, rating: Rating, written_at: DateTime<Utc>) {
        self.content = content;
        self.rating = rating;
        self.written_at = written_at;
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> ReviewId {
        self.review_id
    }
}
