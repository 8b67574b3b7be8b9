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
    models::{Country, CreateCountryRequest, UpdateCountryRequest},
    permissions::{Action, Resource, Scope, can_perform, grant_scope},
};

fn owner_constraint(user: &AuthUser, action: Action) -> Result<Option<Uuid>, StatusCode> {
    match grant_scope(&user.roles, Resource::Country, action) {
        Some(Scope::Any) => Ok(None),
        Some(Scope::Own) => Ok(Some(user.id)),
        None => Err(StatusCode::FORBIDDEN),
    }
}

/// get_countries
///
/// [Public Route] Full country list for form selects, sorted by name.
#[utoipa::path(
    get,
    path = "/countries",
    responses((status = 200, description = "Countries", body = [Country]))
)]
pub async fn get_countries(State(state): State<AppState>) -> Json<Vec<Country>> {
    Json(state.repo.list_countries().await)
}

/// countries_table
///
/// [Admin Route] The management table view: the same rows, fuzzy-filtered
/// and paged in memory since the table is small.
#[utoipa::path(
    get,
    path = "/admin/countries",
    params(ListQuery),
    responses((status = 200, description = "Country table", body = Page<Country>))
)]
pub async fn countries_table(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Page<Country>> {
    let countries = state.repo.list_countries().await;
    Json(paginate_in_memory(countries, &query, |c| c.name.clone()))
}

/// get_country_details
#[utoipa::path(
    get,
    path = "/countries/{id}",
    params(("id" = Uuid, Path, description = "Country ID")),
    responses((status = 200, description = "Found", body = Country))
)]
pub async fn get_country_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Country>, StatusCode> {
    match state.repo.get_country(id).await {
        Some(country) => Ok(Json(country)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// create_country
#[utoipa::path(
    post,
    path = "/countries",
    request_body = CreateCountryRequest,
    responses(
        (status = 201, description = "Created", body = Country),
        (status = 403, description = "Role may not create countries")
    )
)]
pub async fn create_country(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateCountryRequest>,
) -> Result<(StatusCode, Json<Country>), StatusCode> {
    if !can_perform(&user.roles, Resource::Country, Action::Create, false) {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.create_country(payload, user.id).await {
        Some(country) => Ok((StatusCode::CREATED, Json(country))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// update_country
#[utoipa::path(
    put,
    path = "/countries/{id}",
    request_body = UpdateCountryRequest,
    responses(
        (status = 200, description = "Updated", body = Country),
        (status = 403, description = "Role may not update countries"),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn update_country(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCountryRequest>,
) -> Result<Json<Country>, StatusCode> {
    let owner = owner_constraint(&user, Action::Update)?;
    match state.repo.update_country(id, payload, owner).await {
        Some(country) => Ok(Json(country)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_country
///
/// Deleting a country cascades to its regions, so the registry reserves
/// this action for admins.
#[utoipa::path(
    delete,
    path = "/countries/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Role may not delete countries"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_country(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let owner = owner_constraint(&user, Action::Delete)?;
    if state.repo.delete_country(id, owner).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
