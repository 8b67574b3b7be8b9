use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthUser,
    listing::{ListQuery, Page, paginate_in_memory},
    models::{CreateLanguageRequest, Language, UpdateLanguageRequest},
    permissions::{Action, Resource, Scope, can_perform, grant_scope},
};

fn owner_constraint(user: &AuthUser, action: Action) -> Result<Option<Uuid>, StatusCode> {
    match grant_scope(&user.roles, Resource::Language, action) {
        Some(Scope::Any) => Ok(None),
        Some(Scope::Own) => Ok(Some(user.id)),
        None => Err(StatusCode::FORBIDDEN),
    }
}

/// get_languages
///
/// [Public Route] Full language list for form selects.
#[utoipa::path(
    get,
    path = "/languages",
    responses((status = 200, description = "Languages", body = [Language]))
)]
pub async fn get_languages(State(state): State<AppState>) -> Json<Vec<Language>> {
    Json(state.repo.list_languages().await)
}

/// languages_table
///
/// [Admin Route] Management table view, paged in memory.
#[utoipa::path(
    get,
    path = "/admin/languages",
    params(ListQuery),
    responses((status = 200, description = "Language table", body = Page<Language>))
)]
pub async fn languages_table(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Page<Language>> {
    let languages = state.repo.list_languages().await;
    Json(paginate_in_memory(languages, &query, |l| l.name.clone()))
}

/// get_language_details
#[utoipa::path(
    get,
    path = "/languages/{id}",
    params(("id" = Uuid, Path, description = "Language ID")),
    responses((status = 200, description = "Found", body = Language))
)]
pub async fn get_language_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Language>, StatusCode> {
    match state.repo.get_language(id).await {
        Some(language) => Ok(Json(language)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// create_language
#[utoipa::path(
    post,
    path = "/languages",
    request_body = CreateLanguageRequest,
    responses(
        (status = 201, description = "Created", body = Language),
        (status = 403, description = "Role may not create languages")
    )
)]
pub async fn create_language(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateLanguageRequest>,
) -> Result<(StatusCode, Json<Language>), StatusCode> {
    if !can_perform(&user.roles, Resource::Language, Action::Create, false) {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.create_language(payload, user.id).await {
        Some(language) => Ok((StatusCode::CREATED, Json(language))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// update_language
#[utoipa::path(
    put,
    path = "/languages/{id}",
    request_body = UpdateLanguageRequest,
    responses(
        (status = 200, description = "Updated", body = Language),
        (status = 403, description = "Role may not update languages"),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn update_language(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLanguageRequest>,
) -> Result<Json<Language>, StatusCode> {
    let owner = owner_constraint(&user, Action::Update)?;
    match state.repo.update_language(id, payload, owner).await {
        Some(language) => Ok(Json(language)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_language
#[utoipa::path(
    delete,
    path = "/languages/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Role may not delete languages"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_language(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let owner = owner_constraint(&user, Action::Delete)?;
    if state.repo.delete_language(id, owner).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
