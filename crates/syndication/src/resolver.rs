//! Review resolution: everything a store is allowed to display.
//!
//! The result is the store's own reviews followed by the reviews of each store
//! syndicating into it, sources in ascending id order.
//!
//! By default only direct sources are included. [`SyndicationDepth::Transitive`]
//! also follows the sources' own sources, breadth first, visiting every store
//! at most once so that cycles in the edge set terminate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use revsync_core::{DomainResult, StoreId};
use revsync_reviews::ReviewRepository;
use revsync_stores::StoreDirectory;

use crate::EdgeRepository;

/// How far syndication reaches when resolving a store's reviews.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyndicationDepth {
    /// One hop: direct sources only.
    #[default]
    Direct,
    /// Every store reachable through inbound edges.
    Transitive,
}

#[derive(Debug, Clone)]
pub struct ReviewResolver<D, R, E> {
    directory: D,
    reviews: R,
    edges: E,
    depth: SyndicationDepth,
}

impl<D, R, E> ReviewResolver<D, R, E>
where
    D: StoreDirectory,
    R: ReviewRepository,
    E: EdgeRepository,
{
    pub fn new(directory: D, reviews: R, edges: E) -> Self {
        Self {
            directory,
            reviews,
            edges,
            depth: SyndicationDepth::Direct,
        }
    }

    pub fn with_depth(mut self, depth: SyndicationDepth) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> SyndicationDepth {
        self.depth
    }

    /// Review contents visible to `store_id`.
    ///
    /// Fails with `NotFound` for an unknown store. A known store without
    /// reviews or sources yields an empty list.
    pub fn resolve(&self, store_id: StoreId) -> DomainResult<Vec<String>> {
        self.directory.ensure_exists(store_id)?;

        let mut contents = self.reviews.contents_for_store(store_id)?;
        let sources = self.visible_sources(store_id)?;
        for source in &sources {
            contents.extend(self.reviews.contents_for_store(*source)?);
        }

        tracing::debug!(
            %store_id,
            depth = ?self.depth,
            sources = sources.len(),
            reviews = contents.len(),
            "resolved reviews"
        );
        Ok(contents)
    }

    /// Stores whose reviews `store_id` may display, in resolution order.
    pub fn visible_sources(&self, store_id: StoreId) -> DomainResult<Vec<StoreId>> {
        match self.depth {
            SyndicationDepth::Direct => Ok(self.edges.sources_of(store_id)?.into_iter().collect()),
            SyndicationDepth::Transitive => self.reachable_sources(store_id),
        }
    }

    fn reachable_sources(&self, store_id: StoreId) -> DomainResult<Vec<StoreId>> {
        let mut visited = BTreeSet::from([store_id]);
        let mut order = Vec::new();
        let mut frontier = vec![store_id];

        while !frontier.is_empty() {
            let mut next = BTreeSet::new();
            for node in &frontier {
                for source in self.edges.sources_of(*node)? {
                    if visited.insert(source) {
                        next.insert(source);
                    }
                }
            }
            order.extend(next.iter().copied());
            frontier = next.into_iter().collect();
        }

        Ok(order)
    }
}
