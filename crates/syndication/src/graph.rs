//! Syndication graph: validated edge management.
//!
//! An edge may only join two distinct, existing stores of the same
//! organization. Preconditions are checked in a fixed order and the first
//! failure wins:
//!
//! 1. source exists (`NotFound`)
//! 2. target exists (`NotFound`)
//! 3. source != target (`InvalidArgument`)
//! 4. same organization (`Forbidden`)

use std::collections::BTreeSet;

use revsync_core::{DomainError, DomainResult, StoreId};
use revsync_stores::StoreDirectory;

use crate::{EdgeInsert, EdgeRepository, SyndicationEdge};

#[derive(Debug, Clone)]
pub struct SyndicationGraph<D, E> {
    directory: D,
    edges: E,
}

impl<D, E> SyndicationGraph<D, E>
where
    D: StoreDirectory,
    E: EdgeRepository,
{
    pub fn new(directory: D, edges: E) -> Self {
        Self { directory, edges }
    }

    /// Let `target` see the reviews of `source`.
    pub fn add_edge(&self, source: StoreId, target: StoreId) -> DomainResult<EdgeInsert> {
        let edge = SyndicationEdge::new(source, target);
        if let Err(e) = self.validate(edge) {
            tracing::warn!(%source, %target, error = %e, "rejected syndication");
            return Err(e);
        }

        let outcome = self.edges.insert(edge)?;
        match outcome {
            EdgeInsert::Created => tracing::info!(%source, %target, "syndication edge created"),
            EdgeInsert::AlreadyExists => {
                tracing::debug!(%source, %target, "syndication edge already present")
            }
        }
        Ok(outcome)
    }

    /// Stop `target` from seeing the reviews of `source`.
    pub fn remove_edge(&self, source: StoreId, target: StoreId) -> DomainResult<()> {
        self.directory.ensure_exists(source)?;
        self.directory.ensure_exists(target)?;

        let edge = SyndicationEdge::new(source, target);
        if !self.edges.remove(edge)? {
            return Err(DomainError::not_found(format!("syndication edge {edge}")));
        }
        tracing::info!(%source, %target, "syndication edge removed");
        Ok(())
    }

    /// Stores syndicating directly into `target` (one hop), ascending.
    pub fn sources_of(&self, target: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        self.directory.ensure_exists(target)?;
        self.edges.sources_of(target)
    }

    /// Stores that `source` syndicates directly into, ascending.
    pub fn targets_of(&self, source: StoreId) -> DomainResult<BTreeSet<StoreId>> {
        self.directory.ensure_exists(source)?;
        self.edges.targets_of(source)
    }

    fn validate(&self, edge: SyndicationEdge) -> DomainResult<()> {
        let source = self.directory.get(edge.source)?;
        let target = self.directory.get(edge.target)?;

        if edge.is_self_loop() {
            return Err(DomainError::invalid_argument(format!(
                "store {} cannot syndicate to itself",
                edge.source
            )));
        }

        if !source.same_organization(&target) {
            return Err(DomainError::forbidden(format!(
                "stores {} and {} belong to different organizations",
                edge.source, edge.target
            )));
        }

        Ok(())
    }
}
