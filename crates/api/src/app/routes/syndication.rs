use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use revsync_syndication::EdgeInsert;

use crate::app::{dto, errors, services::AppServices};
use crate::context::PrincipalContext;

fn authorized_body(
    principal: &PrincipalContext,
    body: Result<Json<dto::SyndicateRequest>, JsonRejection>,
) -> Result<dto::SyndicateRequest, axum::response::Response> {
    let Json(body) = body.map_err(errors::json_rejection_to_response)?;
    principal
        .authorize_store(body.target_store_id)
        .map_err(errors::authz_error_to_response)?;
    Ok(body)
}

/// Let the target store display the source store's reviews.
///
/// The caller needs a grant on the target (receiving) store; the organization
/// rule between the two stores is enforced by the graph.
pub async fn syndicate(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    body: Result<Json<dto::SyndicateRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match authorized_body(&principal, body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.graph.add_edge(body.source_store_id, body.target_store_id) {
        Ok(outcome) => {
            let status = match outcome {
                EdgeInsert::Created => StatusCode::CREATED,
                EdgeInsert::AlreadyExists => StatusCode::OK,
            };
            (
                status,
                Json(serde_json::json!({
                    "source_store_id": body.source_store_id,
                    "target_store_id": body.target_store_id,
                    "outcome": outcome,
                })),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Stop the target store from displaying the source store's reviews.
pub async fn unsyndicate(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    body: Result<Json<dto::SyndicateRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match authorized_body(&principal, body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.graph.remove_edge(body.source_store_id, body.target_store_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
