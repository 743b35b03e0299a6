//! Store provisioning from a JSON seed file.
//!
//! The file holds an array of stores:
//!
//! ```json
//! [{"store_id": 1, "name": "Downtown", "organization": "acme"}]
//! ```

use std::path::Path;

use thiserror::Error;

use revsync_stores::Store;

use crate::memory::InMemoryStoreDirectory;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed rejected: {0}")]
    Rejected(#[from] revsync_core::DomainError),
}

pub fn parse_stores(json: &str) -> Result<Vec<Store>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_stores(path: &Path) -> Result<Vec<Store>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_stores(&raw)
}

/// Register every store from the seed file. Returns how many were added.
pub fn seed_directory(directory: &InMemoryStoreDirectory, path: &Path) -> Result<usize, SeedError> {
    let stores = load_stores(path)?;
    let count = stores.len();
    for store in stores {
        directory.register(store)?;
    }
    tracing::info!(path = %path.display(), stores = count, "seeded store directory");
    Ok(count)
}
