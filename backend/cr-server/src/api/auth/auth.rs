//! Registration and login

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, JsonBody, LoginRequest, RegisterRequest,
};

use cr_auth::validate_password;
use cr_core::User;

use axum::{Json, extract::State, http::StatusCode};
use log::{info, warn};

/// POST /api/auth/register
///
/// Email and username are checked up front for a friendly error, but the
/// unique indexes are authoritative: a concurrent registration that slips
/// past the checks still comes back as a 400 conflict naming the field.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let name = req.name.trim();
    let email = req.email.trim();

    if name.is_empty() {
        return Err(ApiError::validation("Name is required", "name"));
    }
    if !is_plausible_email(email) {
        return Err(ApiError::validation("Please provide a valid email", "email"));
    }
    validate_password(&req.password)?;

    let users = state.users();

    if users.find_by_email(email).await?.is_some() {
        return Err(ApiError::conflict("email"));
    }

    let username = req
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty());
    if let Some(username) = username
        && users.find_by_username(username).await?.is_some()
    {
        return Err(ApiError::conflict("username"));
    }

    let password_hash = state.hasher.hash(&req.password).await?;
    let user = User::new(
        name.to_string(),
        email.to_string(),
        username.map(str::to_string),
        password_hash,
    );

    users.create(&user).await?;
    let token = state.tokens.issue(user.id)?;

    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.to_public(),
            token,
        }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password produce the identical 401.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .users()
        .find_by_email(req.email.trim())
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    let matches = match state.hasher.verify(&req.password, &user.password_hash).await {
        Ok(matches) => matches,
        Err(e) => {
            warn!("Stored hash for user {} is unusable: {}", user.id, e);
            false
        }
    };

    if !matches {
        return Err(ApiError::invalid_credentials());
    }

    let token = state.tokens.issue(user.id)?;

    Ok(Json(AuthResponse {
        user: user.to_public(),
        token,
    }))
}

/// Something before and after a single '@'
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
