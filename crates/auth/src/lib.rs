//! `revsync-auth` — authentication/authorization boundary for store access.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod authorize;
pub mod claims;
pub mod jwt;
pub mod principal;

pub use authorize::{authorize_store, AuthzError, Principal};
pub use claims::{AccessClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtError, JwtValidator};
pub use principal::PrincipalId;
