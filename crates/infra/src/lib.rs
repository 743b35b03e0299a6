//! Infrastructure layer: storage backends, config, store provisioning.

pub mod config;
pub mod memory;
pub mod seed;

mod integration_tests;

pub use config::{AppConfig, ConfigError};
pub use memory::{InMemoryEdgeRepository, InMemoryReviewRepository, InMemoryStoreDirectory};
pub use seed::SeedError;
