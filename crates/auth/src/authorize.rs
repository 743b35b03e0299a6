use std::collections::BTreeSet;

use thiserror::Error;

use revsync_core::{OrgToken, StoreId};

use crate::{AccessClaims, PrincipalId};

/// A fully resolved principal for authorization decisions.
///
/// Construction of this object is intentionally decoupled from storage and
/// transport: the API derives it from validated claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub principal_id: PrincipalId,
    pub organization: OrgToken,
    pub stores: BTreeSet<StoreId>,
}

impl Principal {
    pub fn from_claims(claims: &AccessClaims) -> Self {
        Self {
            principal_id: claims.sub,
            organization: claims.organization.clone(),
            stores: claims.stores.iter().copied().collect(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: no access to store {0}")]
    StoreNotGranted(StoreId),
}

/// Check that the principal may act on `store_id`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize_store(principal: &Principal, store_id: StoreId) -> Result<(), AuthzError> {
    if principal.stores.contains(&store_id) {
        Ok(())
    } else {
        tracing::debug!(principal = %principal.principal_id, %store_id, "store access denied");
        Err(AuthzError::StoreNotGranted(store_id))
    }
}
