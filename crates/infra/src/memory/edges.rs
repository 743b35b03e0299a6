use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use revsync_core::{DomainResult, StoreId};
use revsync_syndication::{EdgeInsert, EdgeRepository, SyndicationEdge};

use super::poisoned;

/// Adjacency kept in both directions so either lookup is a single map hit.
#[derive(Debug, Default)]
struct Adjacency {
    inbound: HashMap<StoreId, BTreeSet<StoreId>>,
    outbound: HashMap<StoreId, BTreeSet<StoreId>>,
}

/// In-memory syndication edge repository.
#[derive(Debug, Default)]
pub struct InMemoryEdgeRepository {
    inner: RwLock<Adjacency>,
}

impl InMemoryEdgeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EdgeRepository for InMemoryEdgeRepository {
    fn insert(&self, edge: SyndicationEdge) -> DomainResult<EdgeInsert> {
        let mut adj = self.inner.write().map_err(poisoned)?;
        if !adj.inbound.entry(edge.target).or_default().insert(edge.source) {
            return Ok(EdgeInsert::AlreadyExists);
        }
        adj.outbound.entry(edge.source).or_default().insert(edge.target);
        Ok(EdgeInsert::Created)
    }

    fn remove(&self, edge: SyndicationEdge) -> DomainResult<bool> {
        let mut adj = self.inner.write().map_err(poisoned)?;
        let removed = adj
            .inbound
            .get_mut(&edge.target)
            .is_some_and(|sources| sources.remove(&edge.source));
        if removed {
            if let Some(targets) = adj.outbound.get_mut(&edge.source) {
                targets.remove(&edge.target);
            }
        }
        Ok(removed)
    }

    fn sources_of(&self, target: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        let adj = self.inner.read().map_err(poisoned)?;
        Ok(adj.inbound.get(&target).cloned().unwrap_or_default())
    }

    fn targets_of(&self, source: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        let adj = self.inner.read().map_err(poisoned)?;
        Ok(adj.outbound.get(&source).cloned().unwrap_or_default())
    }
}
