use std::collections::HashMap;
use std::sync::RwLock;

use revsync_core::{DomainError, DomainResult, StoreId};
use revsync_stores::{Store, StoreDirectory};

use super::poisoned;

/// Store directory held in memory. Provisioning happens through [`register`].
///
/// [`register`]: InMemoryStoreDirectory::register
#[derive(Debug, Default)]
pub struct InMemoryStoreDirectory {
    inner: RwLock<HashMap<StoreId, Store>>,
}

impl InMemoryStoreDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores(stores: impl IntoIterator<Item = Store>) -> DomainResult<Self> {
        let dir = Self::new();
        for store in stores {
            dir.register(store)?;
        }
        Ok(dir)
    }

    /// Add a store. Store ids are unique; registering an id twice is rejected.
    pub fn register(&self, store: Store) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(poisoned)?;
        if map.contains_key(&store.store_id) {
            return Err(DomainError::invalid_argument(format!(
                "store {} is already registered",
                store.store_id
            )));
        }
        tracing::debug!(store_id = %store.store_id, organization = %store.organization, "registered store");
        map.insert(store.store_id, store);
        Ok(())
    }
}

impl StoreDirectory for InMemoryStoreDirectory {
    fn get(&self, store_id: StoreId) -> DomainResult<Store> {
        let map = self.inner.read().map_err(poisoned)?;
        map.get(&store_id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("store {store_id}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use revsync_core::OrgToken;

    use super::*;

    #[test]
    fn register_and_lookup() {
        let dir = InMemoryStoreDirectory::new();
        dir.register(Store::new(StoreId::new(1), "a", OrgToken::from("X")))
            .unwrap();

        assert!(dir.exists(StoreId::new(1)));
        assert_eq!(dir.organization_of(StoreId::new(1)).unwrap(), OrgToken::from("X"));
        assert!(matches!(
            dir.organization_of(StoreId::new(2)),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let store = Store::new(StoreId::new(1), "a", OrgToken::from("X"));
        let dir = InMemoryStoreDirectory::with_stores([store.clone()]).unwrap();

        let err = dir.register(store).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(dir.get(StoreId::new(1)).unwrap().name, "a");
    }

    #[test]
    fn poisoned_lock_surfaces_as_storage_error() {
        let dir = Arc::new(
            InMemoryStoreDirectory::with_stores([Store::new(StoreId::new(1), "a", OrgToken::from("X"))])
                .unwrap(),
        );

        let writer = Arc::clone(&dir);
        let _ = thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(dir.ensure_exists(StoreId::new(1)), Err(DomainError::Storage(_))));
        assert!(matches!(dir.organization_of(StoreId::new(1)), Err(DomainError::Storage(_))));
        assert!(!dir.exists(StoreId::new(1)));
    }
}
