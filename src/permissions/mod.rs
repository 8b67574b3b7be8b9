//! Declarative role/permission registry and matcher.
//!
//! Each domain entity contributes two static rule tables from its own
//! submodule: route permissions (which roles may reach a path) and model
//! permissions (which roles may create/update/delete records, scoped to
//! "own" or "any"). The tables are concatenated into one effective registry
//! at startup and evaluated by a pure rule-matching loop: first match wins
//! for routes, any granting rule wins for model actions.

use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::models::Role;

pub mod countries;
pub mod languages;
pub mod movies;
pub mod regions;
pub mod roles;
pub mod users;

/// Scope
///
/// Access breadth of a rule: `Own` covers records the user created,
/// `Any` covers all records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Own,
    Any,
}

/// Mutating action on a data entity. Reads are governed by route rules and
/// repository-level visibility filters, not by model rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// Named data entity a model rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Movie,
    Country,
    Region,
    Language,
    User,
    Role,
}

/// RoutePermission
///
/// One rule of the route table. `pattern` is an exact normalized path with
/// `{id}` standing in for dynamic record-id segments, e.g.
/// `/admin/movies/{id}/published`.
#[derive(Debug, Clone, Copy)]
pub struct RoutePermission {
    pub pattern: &'static str,
    pub roles: &'static [Role],
    pub scope: Scope,
}

/// ModelPermission
///
/// One rule of the model table: which roles may perform `action` on
/// `resource`, and over which records.
#[derive(Debug, Clone, Copy)]
pub struct ModelPermission {
    pub resource: Resource,
    pub action: Action,
    pub roles: &'static [Role],
    pub scope: Scope,
}

/// Outcome of matching a request path against the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// A rule matched and the user holds one of its roles. Carries the
    /// rule's scope and the record id extracted from the path, if any.
    Allowed {
        scope: Scope,
        record_id: Option<Uuid>,
    },
    /// A rule matched but none of the user's roles are listed on it.
    Forbidden,
    /// No rule covers this path. Guarded surfaces treat this as a denial.
    Unmatched,
}

struct PermissionRegistry {
    routes: Vec<RoutePermission>,
    models: Vec<ModelPermission>,
}

/// The effective permission list: every entity's tables, concatenated once
/// at startup. Immutable afterwards.
static REGISTRY: LazyLock<PermissionRegistry> = LazyLock::new(|| {
    let mut routes = Vec::new();
    let mut models = Vec::new();
    for table in [
        movies::ROUTE_PERMISSIONS,
        countries::ROUTE_PERMISSIONS,
        regions::ROUTE_PERMISSIONS,
        languages::ROUTE_PERMISSIONS,
        users::ROUTE_PERMISSIONS,
        roles::ROUTE_PERMISSIONS,
    ] {
        routes.extend_from_slice(table);
    }
    for table in [
        movies::MODEL_PERMISSIONS,
        countries::MODEL_PERMISSIONS,
        regions::MODEL_PERMISSIONS,
        languages::MODEL_PERMISSIONS,
        users::MODEL_PERMISSIONS,
        roles::MODEL_PERMISSIONS,
    ] {
        models.extend_from_slice(table);
    }
    PermissionRegistry { routes, models }
});

/// Matches a full UUID path segment (and nothing else).
static UUID_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("uuid segment pattern is valid")
});

/// normalize_path
///
/// Replaces every UUID path segment with the literal `{id}` placeholder and
/// returns the first extracted id alongside the normalized path. Trailing
/// slashes are stripped (the bare root stays `/`); non-UUID segments pass
/// through untouched. Never panics on arbitrary input.
pub fn normalize_path(path: &str) -> (String, Option<Uuid>) {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };

    let mut record_id = None;
    let normalized = path
        .split('/')
        .map(|segment| {
            if UUID_SEGMENT.is_match(segment) {
                if record_id.is_none() {
                    record_id = Uuid::parse_str(segment).ok();
                }
                "{id}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/");

    (normalized, record_id)
}

/// route_decision
///
/// Scans the route table in declaration order for the first rule whose
/// pattern equals the normalized request path. Admins pass any matched
/// rule; everyone else needs a role overlap. Paths with no rule yield
/// `Unmatched` so that guarded routers stay deny-by-default.
pub fn route_decision(user_roles: &[Role], path: &str) -> RouteDecision {
    let (normalized, record_id) = normalize_path(path);

    let Some(rule) = REGISTRY
        .routes
        .iter()
        .find(|rule| rule.pattern == normalized)
    else {
        return RouteDecision::Unmatched;
    };

    let role_match = user_roles.contains(&Role::Admin)
        || rule.roles.iter().any(|role| user_roles.contains(role));

    if role_match {
        RouteDecision::Allowed {
            scope: rule.scope,
            record_id,
        }
    } else {
        RouteDecision::Forbidden
    }
}

/// grant_scope
///
/// Resolves the widest scope under which the user may perform `action` on
/// `resource`. Any-scoped rules dominate own-scoped ones; admins always get
/// `Any`. `None` means no rule grants the action at all.
pub fn grant_scope(user_roles: &[Role], resource: Resource, action: Action) -> Option<Scope> {
    if user_roles.contains(&Role::Admin) {
        return Some(Scope::Any);
    }

    let mut own = false;
    for rule in REGISTRY
        .models
        .iter()
        .filter(|rule| rule.resource == resource && rule.action == action)
    {
        if rule.roles.iter().any(|role| user_roles.contains(role)) {
            match rule.scope {
                Scope::Any => return Some(Scope::Any),
                Scope::Own => own = true,
            }
        }
    }

    if own { Some(Scope::Own) } else { None }
}

/// can_perform
///
/// Boolean form of `grant_scope` for callers that already know whether the
/// user owns the record in question.
pub fn can_perform(user_roles: &[Role], resource: Resource, action: Action, is_owner: bool) -> bool {
    match grant_scope(user_roles, resource, action) {
        Some(Scope::Any) => true,
        Some(Scope::Own) => is_owner,
        None => false,
    }
}
