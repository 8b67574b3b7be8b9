use crate::{AppState, handlers};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, put},
};

/// Admin Router Module
///
/// The moderation and management surface, nested under `/admin`. The
/// `route_guard` layer evaluates every request path against the route
/// permission registry before a handler runs; paths without a rule are
/// denied outright. Handlers keep their own role checks as a second layer.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // Dashboard counters.
        .route("/stats", get(handlers::users::get_admin_stats))
        // Moderation table and publish toggle.
        .route("/movies", get(handlers::movies::get_all_movies))
        .route(
            "/movies/{id}/published",
            put(handlers::movies::set_movie_published),
        )
        // Reference-data management tables (fuzzy-filtered, in-memory paged).
        .route("/countries", get(handlers::countries::countries_table))
        .route("/regions", get(handlers::regions::regions_table))
        .route("/languages", get(handlers::languages::languages_table))
        // User and role administration.
        .route("/users", get(handlers::users::get_users))
        .route("/users/{id}/roles", put(handlers::users::set_user_roles))
        .route("/roles", get(handlers::users::get_roles))
        // Unregistered admin paths are dark: no rule, no route, no 404
        // telling a prober what exists.
        .fallback(|| async { StatusCode::FORBIDDEN })
}
