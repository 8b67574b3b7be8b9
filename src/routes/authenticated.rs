use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post, put},
};

/// Authenticated Router Module
///
/// Routes for any signed-in user. The `auth_middleware` layer above this
/// module guarantees a validated `AuthUser`; whether a given user may
/// actually mutate anything is decided per-request by the model-permission
/// rules, with ownership enforced inside the repository queries.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // Session data.
        .route("/me", get(handlers::session::get_me))
        .route("/me/movies", get(handlers::movies::get_my_movies))
        // Movie submission and self-management. New movies start
        // unpublished; editors update/delete only their own records.
        .route("/movies", post(handlers::movies::create_movie))
        .route(
            "/movies/{id}",
            put(handlers::movies::update_movie).delete(handlers::movies::delete_movie),
        )
        // Reference-data management. Create/update open to editors,
        // destructive actions narrowed by the registry.
        .route("/countries", post(handlers::countries::create_country))
        .route(
            "/countries/{id}",
            put(handlers::countries::update_country).delete(handlers::countries::delete_country),
        )
        .route("/regions", post(handlers::regions::create_region))
        .route(
            "/regions/{id}",
            put(handlers::regions::update_region).delete(handlers::regions::delete_region),
        )
        .route("/languages", post(handlers::languages::create_language))
        .route(
            "/languages/{id}",
            put(handlers::languages::update_language).delete(handlers::languages::delete_language),
        )
}
