use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod handlers;
pub mod images;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod response;

// Module for routing segregation (Public, Authenticated, Super Admin).
pub mod routes;
use auth::AuthAdmin; // The resolved authenticated admin identity.
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

// Makes core state types easily accessible to the application entry point
// and the integration tests.
pub use config::AppConfig;
pub use images::{ImageHostState, ImageKitClient, MockImageHost};
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generates the OpenAPI documentation (Swagger JSON) for the portal.
/// It aggregates every handler decorated with `#[utoipa::path]` and every
/// schema derived with `ToSchema`. The resulting JSON is served at
/// `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login_admin,
        handlers::admins::list_admins, handlers::admins::get_admin,
        handlers::admins::create_admin, handlers::admins::update_admin,
        handlers::admins::delete_admin, handlers::admins::admin_registered_count,
        handlers::students::register_student, handlers::students::list_students,
        handlers::students::get_student, handlers::students::update_student,
        handlers::students::delete_student, handlers::students::student_registered_count,
        handlers::students::student_last_week_registered_count,
        handlers::teachers::list_teachers, handlers::teachers::get_teacher,
        handlers::teachers::create_teacher, handlers::teachers::update_teacher,
        handlers::teachers::delete_teacher,
        handlers::news::list_news, handlers::news::list_published_news,
        handlers::news::get_news, handlers::news::create_news,
        handlers::news::update_news, handlers::news::delete_news,
        handlers::news::news_total_count, handlers::news::news_published_count,
        handlers::social_media::list_social_media, handlers::social_media::get_social_media,
        handlers::social_media::create_social_media, handlers::social_media::update_social_media,
        handlers::social_media::delete_social_media,
        handlers::careers::list_careers, handlers::careers::get_career,
        handlers::careers::create_career, handlers::careers::update_career,
        handlers::careers::delete_career,
    ),
    components(
        schemas(
            models::AdminRole, models::UserStatus, models::NewsStatus,
            models::AdminResponse, models::CreateAdminRequest, models::UpdateAdminRequest,
            models::LoginRequest, models::TokenResponse, models::CountResponse,
            models::Student, models::CreateStudentRequest, models::UpdateStudentRequest,
            models::Teacher, models::CreateTeacherRequest, models::UpdateTeacherRequest,
            models::News, models::CreateNewsRequest, models::UpdateNewsRequest,
            models::SocialMedia, models::CreateSocialMediaRequest,
            models::UpdateSocialMediaRequest,
            models::Career, models::CreateCareerRequest, models::UpdateCareerRequest,
            pagination::PageInfo, response::Meta,
        )
    ),
    tags(
        (name = "school-portal", description = "School Administrative Portal API")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single, thread-safe, immutable container holding every service the
/// handlers depend on. Assembled once at startup and shared across all
/// incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository layer: abstracts database access via the PgPool connection.
    pub repo: RepositoryState,
    /// Image-host layer: abstracts photo uploads to the hosting API.
    pub images: ImageHostState,
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allow extractors to selectively pull components from the shared AppState.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for ImageHostState {
    fn from_ref(app_state: &AppState) -> ImageHostState {
        app_state.images.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the protected route groups. It runs the
/// `AuthAdmin` extractor; if token validation or the account lookup fails,
/// the request is rejected with a 401 envelope before any handler runs.
async fn auth_middleware(_admin: AuthAdmin, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// create_router
///
/// Assembles the application's entire routing structure, applies global and
/// scoped middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS configuration from the allowed-origins list; a "*" entry
    // opens the API to any origin.
    let cors = if state.config.cors_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(Any)
            .allow_headers(Any)
    } else {
        let origins = state
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse::<axum::http::HeaderValue>().ok())
            .collect::<Vec<_>>();
        CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(AllowOrigin::list(origins))
            .allow_headers(Any)
    };

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. API router assembly. The three access tiers are merged under the
    // /api prefix; the protected tiers are wrapped in the auth middleware.
    let api_router = Router::new()
        .merge(public::public_routes())
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        .merge(
            admin::admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        );

    let base_router = Router::new()
        // Documentation: serve the auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // GET /health
        // Unauthenticated liveness probe for monitors and load balancers.
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api_router)
        .with_state(state);

    // 3. Observability and correlation layers (applied outermost).
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID generation: a unique UUID for every request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request tracing: wraps the request/response lifecycle
                // in a span correlated by the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID propagation back to the client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS layer.
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes the `TraceLayer` span creation: includes the `x-request-id`
/// header (if present) alongside the HTTP method and URI, so every log line
/// of a single request shares one correlation ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
