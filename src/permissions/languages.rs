//! Permission tables for the language entity.

use super::{Action, ModelPermission, Resource, RoutePermission, Scope};
use crate::models::Role;

pub const ROUTE_PERMISSIONS: &[RoutePermission] = &[RoutePermission {
    pattern: "/admin/languages",
    roles: &[Role::Admin, Role::Editor],
    scope: Scope::Any,
}];

pub const MODEL_PERMISSIONS: &[ModelPermission] = &[
    ModelPermission {
        resource: Resource::Language,
        action: Action::Create,
        roles: &[Role::Editor],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::Language,
        action: Action::Update,
        roles: &[Role::Editor],
        scope: Scope::Own,
    },
    ModelPermission {
        resource: Resource::Language,
        action: Action::Update,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
    ModelPermission {
        resource: Resource::Language,
        action: Action::Delete,
        roles: &[Role::Admin],
        scope: Scope::Any,
    },
];
