use cine_portal::models::{
    Movie, Role, UpdateCountryRequest, UpdateMovieRequest, User, UserProfile,
};
use serde_json::{Value, json};
use std::str::FromStr;
use uuid::Uuid;

#[test]
fn password_hash_never_serializes() {
    let user = User {
        id: Uuid::from_u128(1),
        email: "user@example.com".to_string(),
        name: "Test User".to_string(),
        password_hash: "$2b$12$super-secret".to_string(),
        roles: vec![Role::Viewer],
        ..User::default()
    };

    let serialized = serde_json::to_string(&user).unwrap();
    assert!(!serialized.contains("password"));
    assert!(!serialized.contains("super-secret"));
}

#[test]
fn user_profile_carries_roles_but_no_credentials() {
    let user = User {
        email: "user@example.com".to_string(),
        password_hash: "hash".to_string(),
        roles: vec![Role::Admin, Role::Editor],
        ..User::default()
    };

    let profile = UserProfile::from(user);
    assert_eq!(profile.roles, vec![Role::Admin, Role::Editor]);

    let value: Value = serde_json::to_value(&profile).unwrap();
    assert!(value.get("password_hash").is_none());
}

#[test]
fn partial_update_omits_unset_fields() {
    let req = UpdateMovieRequest {
        title: Some("New Title".to_string()),
        ..UpdateMovieRequest::default()
    };

    let value: Value = serde_json::to_value(&req).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["title"], "New Title");
}

#[test]
fn empty_partial_update_is_an_empty_object() {
    let value: Value = serde_json::to_value(UpdateCountryRequest::default()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
    assert_eq!(serde_json::to_value(Role::Viewer).unwrap(), json!("viewer"));
}

#[test]
fn role_round_trips_through_strings() {
    for role in Role::ALL {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), *role);
    }
    assert_eq!(Role::from_str("EDITOR").unwrap(), Role::Editor);
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn role_deserializes_from_json() {
    let roles: Vec<Role> = serde_json::from_value(json!(["admin", "editor"])).unwrap();
    assert_eq!(roles, vec![Role::Admin, Role::Editor]);

    let unknown: Result<Role, _> = serde_json::from_value(json!("owner"));
    assert!(unknown.is_err());
}

#[test]
fn movie_defaults_to_unpublished() {
    assert!(!Movie::default().published);
}
