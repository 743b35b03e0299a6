use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use revsync_core::ReviewId;
use revsync_reviews::{CreateReview, UpdateReview};

use crate::app::{dto, errors, services::AppServices};
use crate::context::PrincipalContext;

fn parse_review_id(raw: &str) -> Result<ReviewId, axum::response::Response> {
    raw.parse()
        .map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid review id"))
}

pub async fn create_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    body: Result<Json<dto::CreateReviewRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    if let Err(e) = principal.authorize_store(body.store_id) {
        return errors::authz_error_to_response(e);
    }

    let cmd = CreateReview {
        content: body.review,
        rating: body.rating,
        store_id: body.store_id,
        product_id: body.product_id,
        written_at: body.request_time.unwrap_or_else(Utc::now),
    };

    match services.reviews.create(cmd) {
        Ok(review_id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "review_id": review_id })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let review_id = match parse_review_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let review = match services.reviews.get(review_id) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = principal.authorize_store(review.store_id) {
        return errors::authz_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::ReviewResponse::from(review))).into_response()
}

pub async fn update_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateReviewRequest>, JsonRejection>,
) -> axum::response::Response {
    let review_id = match parse_review_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let existing = match services.reviews.get(review_id) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = principal.authorize_store(existing.store_id) {
        return errors::authz_error_to_response(e);
    }

    let cmd = UpdateReview {
        review_id,
        content: body.review,
        rating: body.rating,
        written_at: body.request_time.unwrap_or_else(Utc::now),
    };

    match services.reviews.update(cmd) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "review updated" })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let review_id = match parse_review_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let existing = match services.reviews.get(review_id) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = principal.authorize_store(existing.store_id) {
        return errors::authz_error_to_response(e);
    }

    match services.reviews.delete(review_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
