//! In-memory storage backends for tests/dev.
//!
//! Each repository owns its own lock, so review writes and edge writes never
//! contend with each other. A lock is held for exactly one repository call,
//! which makes every call atomic with respect to concurrent readers.

pub mod edges;
pub mod reviews;
pub mod stores;

pub use edges::InMemoryEdgeRepository;
pub use reviews::InMemoryReviewRepository;
pub use stores::InMemoryStoreDirectory;

use revsync_core::DomainError;

pub(crate) fn poisoned<T>(_: std::sync::PoisonError<T>) -> DomainError {
    DomainError::storage("lock poisoned")
}
