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
    listing::{ListQuery, Page, paginate_in_memory},
    models::{CreateRegionRequest, Region, UpdateRegionRequest},
    permissions::{Action, Resource, Scope, can_perform, grant_scope},
};

#[derive(Deserialize, utoipa::IntoParams)]
pub struct RegionFilter {
    /// Restrict results to regions of one country.
    pub country: Option<Uuid>,
}

fn owner_constraint(user: &AuthUser, action: Action) -> Result<Option<Uuid>, StatusCode> {
    match grant_scope(&user.roles, Resource::Region, action) {
        Some(Scope::Any) => Ok(None),
        Some(Scope::Own) => Ok(Some(user.id)),
        None => Err(StatusCode::FORBIDDEN),
    }
}

/// get_regions
///
/// [Public Route] Region list, optionally filtered by country for the
/// dependent select on movie forms.
#[utoipa::path(
    get,
    path = "/regions",
    params(RegionFilter),
    responses((status = 200, description = "Regions", body = [Region]))
)]
pub async fn get_regions(
    State(state): State<AppState>,
    Query(filter): Query<RegionFilter>,
) -> Json<Vec<Region>> {
    Json(state.repo.list_regions(filter.country).await)
}

/// regions_table
///
/// [Admin Route] Management table view, paged in memory.
#[utoipa::path(
    get,
    path = "/admin/regions",
    params(ListQuery),
    responses((status = 200, description = "Region table", body = Page<Region>))
)]
pub async fn regions_table(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Page<Region>> {
    let regions = state.repo.list_regions(None).await;
    Json(paginate_in_memory(regions, &query, |r| r.name.clone()))
}

/// get_region_details
#[utoipa::path(
    get,
    path = "/regions/{id}",
    params(("id" = Uuid, Path, description = "Region ID")),
    responses((status = 200, description = "Found", body = Region))
)]
pub async fn get_region_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Region>, StatusCode> {
    match state.repo.get_region(id).await {
        Some(region) => Ok(Json(region)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// create_region
#[utoipa::path(
    post,
    path = "/regions",
    request_body = CreateRegionRequest,
    responses(
        (status = 201, description = "Created", body = Region),
        (status = 403, description = "Role may not create regions")
    )
)]
pub async fn create_region(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateRegionRequest>,
) -> Result<(StatusCode, Json<Region>), StatusCode> {
    if !can_perform(&user.roles, Resource::Region, Action::Create, false) {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.create_region(payload, user.id).await {
        Some(region) => Ok((StatusCode::CREATED, Json(region))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// update_region
#[utoipa::path(
    put,
    path = "/regions/{id}",
    request_body = UpdateRegionRequest,
    responses(
        (status = 200, description = "Updated", body = Region),
        (status = 403, description = "Role may not update regions"),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn update_region(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRegionRequest>,
) -> Result<Json<Region>, StatusCode> {
    let owner = owner_constraint(&user, Action::Update)?;
    match state.repo.update_region(id, payload, owner).await {
        Some(region) => Ok(Json(region)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// delete_region
#[utoipa::path(
    delete,
    path = "/regions/{id}",
    responses(
        (status = 204, description = "Deleted"),
        (status = 403, description = "Role may not delete regions"),
        (status = 404, description = "Not found or not owned")
    )
)]
pub async fn delete_region(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let owner = owner_constraint(&user, Action::Delete)?;
    if state.repo.delete_region(id, owner).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}
