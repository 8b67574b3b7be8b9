//! Permission tables for the movie entity.

use super::{Action, ModelPermission, Resource, RoutePermission, Scope};
use crate::models::Role;

/// Admin surface: the moderation table and the publish toggle.
pub const ROUTE_PERMISSIONS: &[RoutePermission] = &[
    RoutePermission {
        pattern: "/admin/movies",
        roles: &[Role::Admin, Role::Editor],
        scope: Scope::Any,
    },
    RoutePermission {
        pattern: "/admin/movies/{id}/published",
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
];

/// Editors manage the movies they created; admins manage all of them.
pub const MODEL_PERMISSIONS: &[ModelPermission] = &[
    ModelPermission {
        resource: Resource::Movie,
        action: Action::Create,
        roles: &[Role::Editor],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::Movie,
        action: Action::Update,
        roles: &[Role::Editor],
        scope: Scope::Own,
    },
    ModelPermission {
        resource: Resource::Movie,
        action: Action::Update,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::Movie,
        action: Action::Delete,
        roles: &[Role::Editor],
        scope: Scope::Own,
    },
    ModelPermission {
        resource: Resource::Movie,
        action: Action::Delete,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
];
