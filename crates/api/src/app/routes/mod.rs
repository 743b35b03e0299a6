use axum::{
    routing::{get, post, put},
    Router,
};

pub mod reviews;
pub mod stores;
pub mod syndication;
pub mod system;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .route("/reviews", post(reviews::create_review))
        .route(
            "/reviews/:id",
            put(reviews::update_review)
                .get(reviews::get_review)
                .delete(reviews::delete_review),
        )
        .route("/stores/:id/reviews", get(stores::list_reviews))
        .route("/stores/:id/sources", get(stores::list_sources))
        .route("/stores/:id/targets", get(stores::list_targets))
        .route(
            "/syndicate",
            post(syndication::syndicate).delete(syndication::unsyndicate),
        )
}
