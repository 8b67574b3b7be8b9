use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthUser,
    listing::{ListQuery, Page},
    models::{CreateMovieRequest, Movie, Role, UpdateMovieRequest},
    permissions::{Action, Resource, Scope, can_perform, grant_scope},
};

/// Extra filter parameters for the movie listings, on top of `ListQuery`.
#[derive(Deserialize, utoipa::IntoParams)]
pub struct MovieFilter {
    /// Restrict results to a single release year.
    pub year: Option<i32>,
}

/// Resolves the owner constraint for a mutating movie call: `None` means
/// the caller may touch any record, `Some(id)` restricts the statement to
/// rows they created. Errors with 403 when no rule grants the action.
fn owner_constraint(user: &AuthUser, action: Action) -> Result<Option<Uuid>, StatusCode> {
    match grant_scope(&user.roles, Resource::Movie, action) {
        Some(Scope::Any) => Ok(None),
        Some(Scope::Own) => Ok(Some(user.id)),
        None => Err(StatusCode::FORBIDDEN),
    }
}

/// get_movies
///
/// [Public Route] Server-paged listing of published movies with fuzzy
/// search and an optional year filter. The `published = true` restriction
/// is unconditional at the repository layer.
#[utoipa::path(
    get,
    path = "/movies",
    params(ListQuery, MovieFilter),
    responses((status = 200, description = "Published movies", body = Page<Movie>))
)]
pub async fn get_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    Query(filter): Query<MovieFilter>,
) -> Json<Page<Movie>> {
    Json(state.repo.list_published(&query, filter.year).await)
}

/// get_movie_details
///
/// [Public Route] A single published movie. Unpublished records 404 here
/// regardless of who asks.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = Uuid, Path, description = "Movie ID")),
    responses((status = 200, description = "Found", body = Movie))
)]
pub async fn get_movie_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Movie>, StatusCode> {
    match state.repo.get_published_movie(id).await {
        Some(movie) => Ok(Json(movie)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// get_my_movies
///
/// [Authenticated Route] Every movie the user created, published or not.
#[utoipa::path(
    get,
    path = "/me/movies",
    responses((status = 200, description = "My movies", body = [Movie]))
)]
pub async fn get_my_movies(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Json<Vec<Movie>> {
    Json(state.repo.list_by_owner(id).await)
}

/// create_movie
///
/// [Authenticated Route] Submits a new movie, unpublished until moderated.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Created", body = Movie),
        (status = 403, description = "Role may not create movies")
    )
)]
pub async fn create_movie(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieRequest>,
) -> Result<(StatusCode, Json<Movie>), StatusCode> {
    if !can_perform(&user.roles, Resource::Movie, Action::Create, false) {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.create_movie(payload, user.id).await {
        Some(movie) => Ok((StatusCode::CREATED, Json(movie))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// update_movie
///
/// [Authenticated Route] Partial update. Own-scoped callers go through an
/// owner-constrained statement, so a foreign record comes back as 404.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Updated", body = Movie),
        (status = 403, description = "Role may not update movies"),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn update_movie(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateMovieRequest>,
) -> Result<Json<Movie>, StatusCode> {
    let owner = owner_constraint(&user, Action::Update)?;
    match state.repo.update_movie(id, payload, owner).await {
        Some(movie) => Ok(Json(movie)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_movie
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Role may not delete movies"),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn delete_movie(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let owner = owner_constraint(&user, Action::Delete)?;
    if state.repo.delete_movie(id, owner).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

/// get_all_movies
///
/// [Admin Route] The moderation table: every movie regardless of published
/// state, server-paged.
#[utoipa::path(
    get,
    path = "/admin/movies",
    params(ListQuery),
    responses((status = 200, description = "All movies", body = Page<Movie>))
)]
pub async fn get_all_movies(
    AuthUser { roles, .. }: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Page<Movie>>, StatusCode> {
    if !roles.contains(&Role::Admin) && !roles.contains(&Role::Editor) {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.list_all(&query).await))
}

/// set_movie_published
///
/// [Admin Route] Publishes or hides a movie. Requires any-scope update
/// rights on the movie resource, which only admins hold.
#[utoipa::path(
    put,
    path = "/admin/movies/{id}/published",
    params(("id" = Uuid, Path, description = "Movie ID")),
    request_body = bool,
    responses(
        (status = 200, description = "Updated", body = Movie),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Not found")
    )
)]
pub async fn set_movie_published(
    AuthUser { roles, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(published): Json<bool>,
) -> Result<Json<Movie>, StatusCode> {
    if grant_scope(&roles, Resource::Movie, Action::Update) != Some(Scope::Any) {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.set_published(id, published).await {
        Some(movie) => Ok(Json(movie)),
        None => Err(StatusCode::NOT_FOUND),
    }
}
