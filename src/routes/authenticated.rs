use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, patch, post},
};

/// Authenticated Router Module
///
/// Defines the content-management routes available to any admin who passed
/// the authentication layer, regardless of role: teachers, news,
/// social-media links, and career postings.
///
/// Every handler here relies on the `AuthAdmin` extractor middleware being
/// layered above this router, so only requests with a valid token (or the
/// local dev bypass) for an ACTIVE account reach these handlers.
pub fn authenticated_routes() -> Router<AppState> {
    Router::new()
        // --- Teachers ---
        .route("/teachers", post(handlers::teachers::create_teacher))
        .route(
            "/teachers/{id}",
            patch(handlers::teachers::update_teacher).delete(handlers::teachers::delete_teacher),
        )
        // --- News ---
        .route("/news", post(handlers::news::create_news))
        .route(
            "/news/{id}",
            patch(handlers::news::update_news).delete(handlers::news::delete_news),
        )
        // GET /api/news/stats/...
        // Dashboard counters for the news module.
        .route(
            "/news/stats/total-count",
            get(handlers::news::news_total_count),
        )
        .route(
            "/news/stats/published-count",
            get(handlers::news::news_published_count),
        )
        // --- Social Media ---
        .route(
            "/social-media",
            post(handlers::social_media::create_social_media),
        )
        .route(
            "/social-media/{id}",
            patch(handlers::social_media::update_social_media)
                .delete(handlers::social_media::delete_social_media),
        )
        // --- Careers ---
        .route("/careers", post(handlers::careers::create_career))
        .route(
            "/careers/{id}",
            patch(handlers::careers::update_career).delete(handlers::careers::delete_career),
        )
}
