use std::sync::Arc;

use revsync_core::{DomainResult, OrgToken, StoreId};

use crate::Store;

/// Authoritative existence and organization lookup for stores.
///
/// Implementations must return `NotFound` for unknown ids rather than an empty
/// value, so organization membership can never be read for a missing store.
pub trait StoreDirectory: Send + Sync {
    fn get(&self, store_id: StoreId) -> DomainResult<Store>;

    fn exists(&self, store_id: StoreId) -> bool {
        self.get(store_id).is_ok()
    }

    fn organization_of(&self, store_id: StoreId) -> DomainResult<OrgToken> {
        self.get(store_id).map(|s| s.organization)
    }

    /// Fail with `NotFound` unless the store exists. Lookup failures other
    /// than a missing store are returned as-is.
    fn ensure_exists(&self, store_id: StoreId) -> DomainResult<()> {
        self.get(store_id).map(|_| ())
    }
}

impl<S> StoreDirectory for Arc<S>
where
    S: StoreDirectory + ?Sized,
{
    fn get(&self, store_id: StoreId) -> DomainResult<Store> {
        (**self).get(store_id)
    }

    fn exists(&self, store_id: StoreId) -> bool {
        (**self).exists(store_id)
    }

    fn organization_of(&self, store_id: StoreId) -> DomainResult<OrgToken> {
        (**self).organization_of(store_id)
    }

    fn ensure_exists(&self, store_id: StoreId) -> DomainResult<()> {
        (**self).ensure_exists(store_id)
    }
}
