use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Unauthenticated endpoints: the session gateway, plus read-only catalog
/// data. Movie retrieval handlers enforce `published = true` at the
/// repository level; the reference tables (countries/regions/languages)
/// are intentionally world-readable since admin forms and the public site
/// both need them for selects.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // Liveness probe for monitoring and load balancers.
        .route("/health", get(|| async { "ok" }))
        // Session gateway.
        .route("/register", post(handlers::session::register))
        .route("/login", post(handlers::session::login))
        // Published movies: paged listing with search/year filter, and detail.
        .route("/movies", get(handlers::movies::get_movies))
        .route("/movies/{id}", get(handlers::movies::get_movie_details))
        // Reference data.
        .route("/countries", get(handlers::countries::get_countries))
        .route(
            "/countries/{id}",
            get(handlers::countries::get_country_details),
        )
        .route("/regions", get(handlers::regions::get_regions))
        .route("/regions/{id}", get(handlers::regions::get_region_details))
        .route("/languages", get(handlers::languages::get_languages))
        .route(
            "/languages/{id}",
            get(handlers::languages::get_language_details),
        )
}
