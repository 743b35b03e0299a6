//! `revsync-core` — shared building blocks for the review syndication domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrgToken, ProductId, ReviewId, StoreId};
