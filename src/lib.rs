use axum::{
    Router,
    extract::{FromRef, OriginalUri, Request},
    http::{HeaderName, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod auth;
pub mod config;
pub mod handlers;
pub mod listing;
pub mod models;
pub mod permissions;
pub mod repository;
pub mod routes;

use auth::AuthUser;
use permissions::RouteDecision;
use routes::{admin, authenticated, public};

// --- Public Re-exports ---

pub use config::AppConfig;
pub use repository::{PostgresRepository, RepositoryState};

/// ApiDoc
///
/// Auto-generated OpenAPI documentation, aggregating every `#[utoipa::path]`
/// handler and `ToSchema` model. Served as JSON at `/api-docs/openapi.json`
/// and rendered at `/swagger-ui`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::session::register, handlers::session::login, handlers::session::get_me,
        handlers::movies::get_movies, handlers::movies::get_movie_details,
        handlers::movies::get_my_movies, handlers::movies::create_movie,
        handlers::movies::update_movie, handlers::movies::delete_movie,
        handlers::movies::get_all_movies, handlers::movies::set_movie_published,
        handlers::countries::get_countries, handlers::countries::countries_table,
        handlers::countries::get_country_details, handlers::countries::create_country,
        handlers::countries::update_country, handlers::countries::delete_country,
        handlers::regions::get_regions, handlers::regions::regions_table,
        handlers::regions::get_region_details, handlers::regions::create_region,
        handlers::regions::update_region, handlers::regions::delete_region,
        handlers::languages::get_languages, handlers::languages::languages_table,
        handlers::languages::get_language_details, handlers::languages::create_language,
        handlers::languages::update_language, handlers::languages::delete_language,
        handlers::users::get_users, handlers::users::set_user_roles,
        handlers::users::get_roles, handlers::users::get_admin_stats
    ),
    components(
        schemas(
            models::Role, models::Movie, models::Country, models::Region, models::Language,
            models::UserProfile, models::CreateMovieRequest, models::UpdateMovieRequest,
            models::CreateCountryRequest, models::UpdateCountryRequest,
            models::CreateRegionRequest, models::UpdateRegionRequest,
            models::CreateLanguageRequest, models::UpdateLanguageRequest,
            models::RegisterRequest, models::LoginRequest, models::LoginResponse,
            models::SetRolesRequest, models::CatalogStats,
            listing::SortOrder,
            listing::Page<models::Movie>, listing::Page<models::Country>,
            listing::Page<models::Region>, listing::Page<models::Language>,
        )
    ),
    tags(
        (name = "cine-portal", description = "Movie Catalog Admin API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Unified, immutable application state shared across all requests.
#[derive(Clone)]
pub struct AppState {
    /// Repository layer: database access behind the per-entity traits.
    pub repo: RepositoryState,
    /// The loaded environment configuration.
    pub config: AppConfig,
}

// FromRef implementations so extractors can pull individual components
// out of the shared state.

impl FromRef<AppState> for RepositoryState {
    fn from_ref(app_state: &AppState) -> RepositoryState {
        app_state.repo.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// auth_middleware
///
/// Enforces authentication for the authenticated router. Extracting
/// `AuthUser` performs the full JWT validation and DB lookup; failure
/// rejects with 401 before the handler runs.
async fn auth_middleware(_auth_user: AuthUser, request: Request, next: Next) -> Response {
    next.run(request).await
}

/// route_guard
///
/// Evaluates the request path against the declarative route-permission
/// registry. Only an explicit `Allowed` lets the request through; both a
/// role mismatch and the absence of any rule produce 403, keeping the
/// guarded surface deny-by-default.
///
/// The original (pre-nesting) URI is used so registry patterns carry the
/// full `/admin/...` path.
async fn route_guard(
    auth_user: AuthUser,
    OriginalUri(uri): OriginalUri,
    request: Request,
    next: Next,
) -> Response {
    match permissions::route_decision(&auth_user.roles, uri.path()) {
        RouteDecision::Allowed { .. } => next.run(request).await,
        RouteDecision::Forbidden | RouteDecision::Unmatched => {
            StatusCode::FORBIDDEN.into_response()
        }
    }
}

/// create_router
///
/// Assembles the routing structure, applies global and scoped middleware,
/// and registers the application state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        // Documentation: auto-generated Swagger UI.
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public routes: no middleware.
        .merge(public::public_routes())
        // Authenticated routes: identity required, permissions per-handler.
        .merge(
            authenticated::authenticated_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
        )
        // Admin routes: identity plus the route-permission registry.
        .nest(
            "/admin",
            admin::admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), route_guard)),
        )
        .with_state(state);

    // Observability and correlation layers, outermost.
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span factory for `TraceLayer`: includes the generated `x-request-id` so
/// every log line of a request is correlated by a unique id.
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
