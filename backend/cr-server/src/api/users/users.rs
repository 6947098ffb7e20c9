//! User profile handlers

use crate::{ApiError, ApiResult, AppState, AuthUser, JsonBody, UpdateProfileRequest};

use cr_auth::validate_password;
use cr_core::{PublicUser, Role};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

const USER_NOT_FOUND: &str = "User not found";

/// GET /api/users/profile
pub async fn get_profile(AuthUser(user): AuthUser) -> Json<PublicUser> {
    Json(user)
}

/// PUT /api/users/profile
///
/// Empty or missing fields keep their stored values.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<PublicUser>> {
    let users = state.users();

    let mut user = users
        .find_by_id(caller.id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    if let Some(name) = non_empty(req.name) {
        user.name = name;
    }

    if let Some(username) = non_empty(req.username)
        && user.username.as_deref() != Some(username.as_str())
    {
        if let Some(holder) = users.find_by_username(&username).await?
            && holder.id != user.id
        {
            return Err(ApiError::conflict("username"));
        }
        user.username = Some(username);
    }

    if let Some(role) = non_empty(req.role) {
        user.role = Role::from_str(&role)?;
    }

    if let Some(avatar) = non_empty(req.avatar) {
        user.avatar = Some(avatar);
    }
    if let Some(bio) = non_empty(req.bio) {
        user.bio = Some(bio);
    }
    if let Some(job_role) = non_empty(req.job_role) {
        user.job_role = Some(job_role);
    }
    if let Some(linkedin) = non_empty(req.linkedin) {
        user.linkedin = Some(linkedin);
    }
    if let Some(github) = non_empty(req.github) {
        user.github = Some(github);
    }

    // Passwords are taken verbatim; surrounding whitespace is significant
    if let Some(password) = req.password.filter(|p| !p.is_empty()) {
        validate_password(&password)?;
        user.password_hash = state.hasher.hash(&password).await?;
        info!("User {} changed their password", user.id);
    }

    user.updated_at = Utc::now();

    if !users.update(&user).await? {
        return Err(ApiError::not_found(USER_NOT_FOUND));
    }

    Ok(Json(user.to_public()))
}

/// GET /api/users/{id}
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PublicUser>> {
    let user_id = Uuid::parse_str(&id).map_err(|_| ApiError::not_found(USER_NOT_FOUND))?;

    let user = state
        .users()
        .find_public_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(USER_NOT_FOUND))?;

    Ok(Json(user))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
