use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    auth::AuthUser,
    models::{CatalogStats, Role, SetRolesRequest, UserProfile},
    permissions::{Action, Resource, can_perform},
};

/// get_users
///
/// [Admin Route] The user management table. Profiles only, never hashes.
#[utoipa::path(
    get,
    path = "/admin/users",
    responses(
        (status = 200, description = "All users", body = [UserProfile]),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_users(
    AuthUser { roles, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserProfile>>, StatusCode> {
    if !roles.contains(&Role::Admin) {
        return Err(StatusCode::FORBIDDEN);
    }
    let users = state.repo.list_users().await;
    Ok(Json(users.into_iter().map(UserProfile::from).collect()))
}

/// set_user_roles
///
/// [Admin Route] Replaces a user's role set. Gated by the role-resource
/// model rule rather than a hardcoded string check, so the registry stays
/// the single source of truth.
#[utoipa::path(
    put,
    path = "/admin/users/{id}/roles",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = SetRolesRequest,
    responses(
        (status = 200, description = "Roles updated", body = UserProfile),
        (status = 403, description = "Role may not manage roles"),
        (status = 404, description = "User not found")
    )
)]
pub async fn set_user_roles(
    AuthUser { roles, .. }: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetRolesRequest>,
) -> Result<Json<UserProfile>, StatusCode> {
    if !can_perform(&roles, Resource::Role, Action::Update, false) {
        return Err(StatusCode::FORBIDDEN);
    }
    match state.repo.set_user_roles(id, payload.roles).await {
        Some(user) => Ok(Json(user.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// get_roles
///
/// [Admin Route] The fixed role vocabulary, for the assignment dropdown.
#[utoipa::path(
    get,
    path = "/admin/roles",
    responses((status = 200, description = "Available roles", body = [Role]))
)]
pub async fn get_roles(
    AuthUser { roles, .. }: AuthUser,
) -> Result<Json<Vec<Role>>, StatusCode> {
    if !roles.contains(&Role::Admin) {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(Role::ALL.to_vec()))
}

/// get_admin_stats
///
/// [Admin Route] Dashboard counters.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Stats", body = CatalogStats),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn get_admin_stats(
    AuthUser { roles, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<CatalogStats>, StatusCode> {
    if !roles.contains(&Role::Admin) {
        return Err(StatusCode::FORBIDDEN);
    }
    Ok(Json(state.repo.get_stats().await))
}
