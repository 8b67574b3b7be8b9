use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    auth::{AuthUser, issue_token},
    models::{LoginRequest, LoginResponse, RegisterRequest, Role, UserProfile},
};

/// register
///
/// [Public Route] Creates a new account with the `viewer` role. Passwords
/// are bcrypt-hashed before reaching the repository and never logged.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered", body = UserProfile),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserProfile>), StatusCode> {
    if state.repo.get_user_by_email(&payload.email).await.is_some() {
        return Err(StatusCode::CONFLICT);
    }

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let email = payload.email.clone();
    let user = match state
        .repo
        .create_user(payload.email, payload.name, password_hash, Role::Viewer)
        .await
    {
        Some(user) => user,
        // The insert can lose a race with a concurrent registration for the
        // same email: the unique constraint fires after our existence check
        // passed. Re-check so that case surfaces as a conflict.
        None => {
            return if state.repo.get_user_by_email(&email).await.is_some() {
                Err(StatusCode::CONFLICT)
            } else {
                Err(StatusCode::INTERNAL_SERVER_ERROR)
            };
        }
    };

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// login
///
/// [Public Route] Verifies credentials and issues a signed session token.
/// Both unknown email and wrong password collapse to 401 so the response
/// does not leak which accounts exist.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let user = state
        .repo
        .get_user_by_email(&payload.email)
        .await
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let valid = bcrypt::verify(&payload.password, &user.password_hash).unwrap_or(false);
    if !valid {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let token = issue_token(user.id, &state.config.jwt_secret)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// get_me
///
/// [Authenticated Route] The authenticated user's profile, with the role
/// set as currently stored (not as it was when the token was signed).
#[utoipa::path(
    get,
    path = "/me",
    responses((status = 200, description = "Profile", body = UserProfile))
)]
pub async fn get_me(
    AuthUser { id, .. }: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<UserProfile>, StatusCode> {
    match state.repo.get_user(id).await {
        Some(user) => Ok(Json(user.into())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
