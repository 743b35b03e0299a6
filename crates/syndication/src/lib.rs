//! Review syndication: which stores may see which other stores' reviews.
//!
//! - [`graph`]: directed source → target edges, restricted to one organization.
//! - [`resolver`]: the review set visible to a store (own reviews plus syndicated ones).

pub mod edge;
pub mod graph;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use edge::{EdgeInsert, EdgeRepository, SyndicationEdge};
pub use graph::SyndicationGraph;
pub use resolver::{ReviewResolver, SyndicationDepth};
