use cine_portal::models::Role;
use cine_portal::permissions::{
    Action, Resource, RouteDecision, Scope, can_perform, grant_scope, normalize_path,
    route_decision,
};
use uuid::Uuid;

const MOVIE_ID: Uuid = Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0);

// --- Path normalization ---

#[test]
fn normalize_replaces_uuid_segments() {
    let (path, id) = normalize_path(&format!("/admin/movies/{}/published", MOVIE_ID));
    assert_eq!(path, "/admin/movies/{id}/published");
    assert_eq!(id, Some(MOVIE_ID));
}

#[test]
fn normalize_extracts_first_of_multiple_ids() {
    let second = Uuid::from_u128(99);
    let (path, id) = normalize_path(&format!("/a/{}/b/{}", MOVIE_ID, second));
    assert_eq!(path, "/a/{id}/b/{id}");
    assert_eq!(id, Some(MOVIE_ID));
}

#[test]
fn normalize_leaves_plain_paths_alone() {
    let (path, id) = normalize_path("/admin/users");
    assert_eq!(path, "/admin/users");
    assert_eq!(id, None);
}

#[test]
fn normalize_strips_trailing_slash() {
    let (path, _) = normalize_path("/admin/users/");
    assert_eq!(path, "/admin/users");

    let (root, _) = normalize_path("/");
    assert_eq!(root, "/");
}

#[test]
fn normalize_ignores_non_uuid_segments() {
    // Things that look almost like UUIDs must pass through verbatim.
    let (path, id) = normalize_path("/movies/not-a-uuid/12345678");
    assert_eq!(path, "/movies/not-a-uuid/12345678");
    assert_eq!(id, None);
}

// --- Route decisions ---

#[test]
fn admin_reaches_user_management() {
    let decision = route_decision(&[Role::Admin], "/admin/users");
    assert!(matches!(decision, RouteDecision::Allowed { .. }));
}

#[test]
fn editor_is_forbidden_from_user_management() {
    assert_eq!(
        route_decision(&[Role::Editor], "/admin/users"),
        RouteDecision::Forbidden
    );
}

#[test]
fn editor_reaches_moderation_table() {
    assert!(matches!(
        route_decision(&[Role::Editor], "/admin/movies"),
        RouteDecision::Allowed { .. }
    ));
}

#[test]
fn viewer_is_forbidden_from_management_tables() {
    assert_eq!(
        route_decision(&[Role::Viewer], "/admin/countries"),
        RouteDecision::Forbidden
    );
}

#[test]
fn unknown_paths_are_unmatched_even_for_admins() {
    assert_eq!(
        route_decision(&[Role::Admin], "/admin/does-not-exist"),
        RouteDecision::Unmatched
    );
}

#[test]
fn route_decision_carries_scope_and_record_id() {
    let path = format!("/admin/movies/{}/published", MOVIE_ID);
    match route_decision(&[Role::Admin], &path) {
        RouteDecision::Allowed { scope, record_id } => {
            assert_eq!(scope, Scope::Any);
            assert_eq!(record_id, Some(MOVIE_ID));
        }
        other => panic!("expected Allowed, got {:?}", other),
    }
}

#[test]
fn user_with_no_roles_gets_nothing() {
    assert_eq!(route_decision(&[], "/admin/movies"), RouteDecision::Forbidden);
    assert!(!can_perform(&[], Resource::Movie, Action::Create, true));
}

#[test]
fn trailing_slash_still_matches_registry_patterns() {
    assert!(matches!(
        route_decision(&[Role::Admin], "/admin/users/"),
        RouteDecision::Allowed { .. }
    ));
}

// --- Model rules ---

#[test]
fn editor_creates_movies_with_any_scope() {
    assert_eq!(
        grant_scope(&[Role::Editor], Resource::Movie, Action::Create),
        Some(Scope::Any)
    );
}

#[test]
fn editor_updates_only_own_movies() {
    assert_eq!(
        grant_scope(&[Role::Editor], Resource::Movie, Action::Update),
        Some(Scope::Own)
    );
    assert!(can_perform(
        &[Role::Editor],
        Resource::Movie,
        Action::Update,
        true
    ));
    assert!(!can_perform(
        &[Role::Editor],
        Resource::Movie,
        Action::Update,
        false
    ));
}

#[test]
fn admin_bypasses_every_model_rule() {
    assert_eq!(
        grant_scope(&[Role::Admin], Resource::Movie, Action::Update),
        Some(Scope::Any)
    );
    assert!(can_perform(
        &[Role::Admin],
        Resource::Country,
        Action::Delete,
        false
    ));
}

#[test]
fn viewer_is_read_only() {
    for action in [Action::Create, Action::Update, Action::Delete] {
        assert_eq!(grant_scope(&[Role::Viewer], Resource::Movie, action), None);
    }
}

#[test]
fn country_deletion_is_admin_only() {
    assert_eq!(
        grant_scope(&[Role::Editor], Resource::Country, Action::Delete),
        None
    );
    assert_eq!(
        grant_scope(&[Role::Admin], Resource::Country, Action::Delete),
        Some(Scope::Any)
    );
}

#[test]
fn any_scoped_rule_dominates_own_scoped_rule() {
    // A user holding both roles named on the Own and Any update rules gets
    // the wider grant.
    assert_eq!(
        grant_scope(&[Role::Editor, Role::Admin], Resource::Movie, Action::Update),
        Some(Scope::Any)
    );
}

#[test]
fn role_management_requires_admin() {
    assert!(!can_perform(
        &[Role::Editor, Role::Viewer],
        Resource::Role,
        Action::Update,
        true
    ));
    assert!(can_perform(&[Role::Admin], Resource::Role, Action::Update, false));
}
