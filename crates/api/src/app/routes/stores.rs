use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use revsync_core::StoreId;

use crate::app::{errors, services::AppServices};
use crate::context::PrincipalContext;

fn parse_store_id(raw: &str) -> Result<StoreId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid store id"))
}

/// Every review visible to the store: its own plus syndicated ones.
///
/// An unknown store is a 404; a known store with nothing to show is an empty list.
pub async fn list_reviews(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let store_id = match parse_store_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = principal.authorize_store(store_id) {
        return errors::authz_error_to_response(e);
    }

    match services.resolver.resolve(store_id) {
        Ok(reviews) => (
            StatusCode::OK,
            Json(serde_json::json!({ "store_id": store_id, "reviews": reviews })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_sources(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let store_id = match parse_store_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = principal.authorize_store(store_id) {
        return errors::authz_error_to_response(e);
    }

    match services.graph.sources_of(store_id) {
        Ok(sources) => (
            StatusCode::OK,
            Json(serde_json::json!({ "store_id": store_id, "sources": sources })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Stores this store syndicates into.
pub async fn list_targets(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let store_id = match parse_store_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    if let Err(e) = principal.authorize_store(store_id) {
        return errors::authz_error_to_response(e);
    }

    match services.graph.targets_of(store_id) {
        Ok(targets) => (
            StatusCode::OK,
            Json(serde_json::json!({ "store_id": store_id, "targets": targets })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
