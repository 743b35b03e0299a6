//! Reviews domain module.
//!
//! Review records, their field rules, and the store-scoped review service. The
//! storage itself is injected through [`ReviewRepository`].

pub mod repository;
pub mod review;
pub mod service;

pub use repository::ReviewRepository;
pub use review::{NewReview, Rating, Review, ReviewContent, MAX_CONTENT_CHARS};
pub use service::{CreateReview, ReviewService, UpdateReview};
