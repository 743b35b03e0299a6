use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use revsync_core::{DomainResult, StoreId};

/// Directed edge: `target` may display the reviews of `source`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SyndicationEdge {
    pub source: StoreId,
    pub target: StoreId,
}

impl SyndicationEdge {
    pub fn new(source: StoreId, target: StoreId) -> Self {
        Self { source, target }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl core::fmt::Display for SyndicationEdge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Outcome of an edge insert. Inserting an existing edge is not an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeInsert {
    Created,
    AlreadyExists,
}

/// Storage for syndication edges.
///
/// Each call is atomic; readers never observe a half-inserted edge. Validation
/// (existence, organization) is the graph's job, not the repository's.
pub trait EdgeRepository: Send + Sync {
    fn insert(&self, edge: SyndicationEdge) -> DomainResult<EdgeInsert>;

    /// Returns `false` when the edge did not exist.
    fn remove(&self, edge: SyndicationEdge) -> DomainResult<bool>;

    /// Direct inbound neighbours of `target`.
    fn sources_of(&self, target: StoreId) -> DomainResult<BTreeSet<StoreId>>;

    /// Direct outbound neighbours of `source`.
    fn targets_of(&self, source: StoreId) -> DomainResult<BTreeSet<StoreId>>;
}

impl<E> EdgeRepository for Arc<E>
where
    E: EdgeRepository + ?Sized,
{
    fn insert(&self, edge: SyndicationEdge) -> DomainResult<EdgeInsert> {
        (**self).insert(edge)
    }

    fn remove(&self, edge: SyndicationEdge) -> DomainResult<bool> {
        (**self).remove(edge)
    }

    fn sources_of(&self, target: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        (**self).sources_of(target)
    }

    fn targets_of(&self, source: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        (**self).targets_of(source)
    }
}
