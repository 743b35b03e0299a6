use revsync_auth::{AuthzError, Principal, PrincipalId, authorize_store};
use revsync_core::{OrgToken, StoreId};

/// Principal context for a request (authenticated identity + store grants).
///
/// This is immutable and must be present for all protected routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn principal_id(&self) -> PrincipalId {
        self.principal.principal_id
    }

    pub fn organization(&self) -> &OrgToken {
        &self.principal.organization
    }

    pub fn stores(&self) -> impl Iterator<Item = StoreId> + '_ {
        self.principal.stores.iter().copied()
    }

    pub fn authorize_store(&self, store_id: StoreId) -> Result<(), AuthzError> {
        authorize_store(&self.principal, store_id)
    }
}
