//! Permission tables for the country entity.

use super::{Action, ModelPermission, Resource, RoutePermission, Scope};
use crate::models::Role;

pub const ROUTE_PERMISSIONS: &[RoutePermission] = &[RoutePermission {
    pattern: "/admin/countries",
    roles: &[Role::Admin, Role::Editor],
    scope: Scope::Any,
}];

pub const MODEL_PERMISSIONS: &[ModelPermission] = &[
    ModelPermission {
        resource: Resource::Country,
        action: Action::Create,
        roles: &[Role::Editor],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::Country,
        action: Action::Update,
        roles: &[Role::Editor],
        scope: Scope::Own,
    },
    ModelPermission {
        resource: Resource::Country,
        action: Action::Update,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::Country,
        action: Action::Delete,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
];
