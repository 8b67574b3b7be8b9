use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Roles ---

/// Role
///
/// The RBAC role set. A user holds any number of these; the permission
/// registry in `crate::permissions` matches them against declarative
/// route and model rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Full control over every resource and record.
    Admin,
    /// May create catalog records and manage the ones they created.
    Editor,
    /// Read-only access to the catalog.
    Viewer,
}

impl Role {
    /// All roles, in privilege order. Served by GET /admin/roles.
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Editor, Role::Viewer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

// --- Core Catalog Schemas (Mapped to Database) ---

/// User
///
/// Canonical identity record from the `users` table. The password hash is
/// never serialized; roles are loaded from `user_roles` by the repository
/// and are not part of the SQL row mapping.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip)]
    #[ts(skip)]
    #[schema(ignore)]
    pub password_hash: String,
    #[sqlx(skip)]
    pub roles: Vec<Role>,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Country
///
/// Reference entity. `created_by` drives the "own" permission scope.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Country {
    pub id: Uuid,
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub code: String,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Region
///
/// Sub-national division of a country.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Region {
    pub id: Uuid,
    pub country_id: Uuid,
    pub name: String,
    pub code: String,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Language
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    /// ISO 639-1 code.
    pub code: String,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

/// Movie
///
/// The primary catalog record. `published` controls public visibility and
/// is flipped only through the admin moderation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub year: i32,
    pub synopsis: String,
    pub country_id: Option<Uuid>,
    pub language_id: Option<Uuid>,
    pub published: bool,
    pub created_by: Uuid,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    #[ts(type = "string")]
    pub updated_at: DateTime<Utc>,
}

// --- Request Payloads (Input Schemas) ---

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateMovieRequest {
    pub title: String,
    pub year: i32,
    pub synopsis: String,
    pub country_id: Option<Uuid>,
    pub language_id: Option<Uuid>,
}

/// UpdateMovieRequest
///
/// Partial update payload. All fields are `Option<T>` so only the provided
/// columns are touched (COALESCE at the repository layer).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateMovieRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<Uuid>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateCountryRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateCountryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateRegionRequest {
    pub country_id: Uuid,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateRegionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CreateLanguageRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpdateLanguageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// --- Session Schemas ---

/// RegisterRequest
///
/// Input for the public registration endpoint. The password is bcrypt-hashed
/// before it touches the database and is never logged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// LoginResponse
///
/// Bearer token plus the resolved profile, so the client can render the
/// session without a second round trip.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// UserProfile
///
/// Output schema for `/me` and the admin user table. Same shape as `User`
/// minus anything credential-adjacent.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub roles: Vec<Role>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            email: user.email,
            name: user.name,
            roles: user.roles,
        }
    }
}

/// SetRolesRequest
///
/// Admin payload replacing a user's entire role set.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct SetRolesRequest {
    pub roles: Vec<Role>,
}

// --- Dashboard Schemas (Output) ---

/// CatalogStats
///
/// Counters for the administrative dashboard (GET /admin/stats).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct CatalogStats {
    pub total_movies: i64,
    /// Movies awaiting moderation (`published = false`).
    pub unpublished_movies: i64,
    pub total_users: i64,
    pub total_countries: i64,
    pub total_regions: i64,
    pub total_languages: i64,
}
