//! Store directory: which stores exist and which organization owns them.
//!
//! Stores are provisioned out-of-band; this crate only models lookups.

pub mod directory;
pub mod store;

pub use directory::StoreDirectory;
pub use store::Store;
