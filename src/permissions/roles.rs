//! Permission tables for the role entity. Roles themselves are a fixed
//! enum; the only mutation is changing a user's assignments.

use super::{Action, ModelPermission, Resource, RoutePermission, Scope};
use crate::models::Role;

pub const ROUTE_PERMISSIONS: &[RoutePermission] = &[RoutePermission {
    pattern: "/admin/roles",
    roles: &[Role::Admin],
    scope: Scope::Any,
}];

pub const MODEL_PERMISSIONS: &[ModelPermission] = &[ModelPermission {
    resource: Resource::Role,
    action: Action::Update,
    roles: &[Role::Admin],
    scope: Scope::Any,
}];
