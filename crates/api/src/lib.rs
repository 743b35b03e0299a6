//! HTTP API: server, routing, and request/response mapping.
//!
//! The handlers are thin: they parse, authorize against the token's store
//! grants, call the review/syndication services, and map errors to statuses.

pub mod app;
pub mod context;
pub mod middleware;
