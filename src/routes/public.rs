use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any
/// client. These carry the login gateway, the public enrollment form, and
/// the read-only content the school website renders.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // POST /api/auth/login/admin
        // Exchanges admin credentials for a one-hour bearer token.
        .route("/auth/login/admin", post(handlers::auth::login_admin))
        // POST /api/students
        // The public student enrollment form. Creation is open; every other
        // student operation lives in the super-admin router.
        .route("/students", post(handlers::students::register_student))
        // GET /api/teachers, /api/teachers/{id}
        // Teaching staff shown on the public website.
        .route("/teachers", get(handlers::teachers::list_teachers))
        .route("/teachers/{id}", get(handlers::teachers::get_teacher))
        // GET /api/news, /api/news/published, /api/news/{id}
        // News listings. The /published view is what the website renders;
        // the unfiltered listing also carries drafts.
        .route("/news", get(handlers::news::list_news))
        .route("/news/published", get(handlers::news::list_published_news))
        .route("/news/{id}", get(handlers::news::get_news))
        // GET /api/social-media, /api/social-media/{id}
        .route("/social-media", get(handlers::social_media::list_social_media))
        .route(
            "/social-media/{id}",
            get(handlers::social_media::get_social_media),
        )
        // GET /api/careers, /api/careers/{id}
        .route("/careers", get(handlers::careers::list_careers))
        .route("/careers/{id}", get(handlers::careers::get_career))
}
