use serde::{Deserialize, Serialize};

use revsync_core::{Entity, OrgToken, StoreId};

/// A store and the organization it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: StoreId,
    #[serde(default)]
    pub name: String,
    pub organization: OrgToken,
}

impl Store {
    pub fn new(store_id: StoreId, name: impl Into<String>, organization: OrgToken) -> Self {
        Self {
            store_id,
            name: name.into(),
            organization,
        }
    }

    /// True when both stores are owned by the same organization.
    pub fn same_organization(&self, other: &Store) -> bool {
        self.organization == other.organization
    }
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> StoreId {
        self.store_id
    }
}
