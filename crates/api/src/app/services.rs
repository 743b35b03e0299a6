use std::sync::Arc;

use revsync_infra::{
    seed::{self, SeedError},
    AppConfig, InMemoryEdgeRepository, InMemoryReviewRepository, InMemoryStoreDirectory,
};
use revsync_reviews::ReviewService;
use revsync_syndication::{ReviewResolver, SyndicationDepth, SyndicationGraph};

pub type Directory = Arc<InMemoryStoreDirectory>;
pub type Reviews = Arc<InMemoryReviewRepository>;
pub type Edges = Arc<InMemoryEdgeRepository>;

/// Everything the handlers need, sharing one set of repositories.
pub struct AppServices {
    pub directory: Directory,
    pub reviews: ReviewService<Directory, Reviews>,
    pub graph: SyndicationGraph<Directory, Edges>,
    pub resolver: ReviewResolver<Directory, Reviews, Edges>,
}

impl AppServices {
    /// Wire services over fresh in-memory review and edge storage.
    pub fn in_memory(directory: InMemoryStoreDirectory, depth: SyndicationDepth) -> Self {
        let directory = Arc::new(directory);
        let reviews = Arc::new(InMemoryReviewRepository::new());
        let edges = Arc::new(InMemoryEdgeRepository::new());

        Self {
            reviews: ReviewService::new(directory.clone(), reviews.clone()),
            graph: SyndicationGraph::new(directory.clone(), edges.clone()),
            resolver: ReviewResolver::new(directory.clone(), reviews, edges).with_depth(depth),
            directory,
        }
    }

    /// Wire services and provision stores from the configured seed file, if any.
    pub fn from_config(config: &AppConfig) -> Result<Self, SeedError> {
        let directory = InMemoryStoreDirectory::new();
        match &config.seed_path {
            Some(path) => {
                seed::seed_directory(&directory, path)?;
            }
            None => tracing::warn!("no seed file configured; store directory starts empty"),
        }
        Ok(Self::in_memory(directory, config.syndication_depth))
    }
}
