//! Permission tables for the user entity, including the dashboard routes
//! that surface user and catalog statistics.

use super::{Action, ModelPermission, Resource, RoutePermission, Scope};
use crate::models::Role;

pub const ROUTE_PERMISSIONS: &[RoutePermission] = &[
    RoutePermission {
        pattern: "/admin/users",
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    RoutePermission {
        pattern: "/admin/users/{id}/roles",
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    RoutePermission {
        pattern: "/admin/stats",
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
];

/// User records are managed exclusively by admins. Self-service signup goes
/// through the public register endpoint, not through these rules.
pub const MODEL_PERMISSIONS: &[ModelPermission] = &[
    ModelPermission {
        resource: Resource::User,
        action: Action::Create,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::User,
        action: Action::Update,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::User,
        action: Action::Delete,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
];
