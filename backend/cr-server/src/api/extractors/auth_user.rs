//! Access control for protected routes

use crate::api::error::{NO_TOKEN_MESSAGE, TOKEN_FAILED_MESSAGE, USER_NOT_FOUND_MESSAGE};
use crate::{ApiError, AppState};

use cr_auth::AccessState;
use cr_core::PublicUser;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The authenticated caller, loaded without its password hash.
///
/// Adding this extractor to a handler makes the route protected: the handler
/// only runs once the bearer token verified and the identity still exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub PublicUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let identity_id = match AccessState::from_authorization(header).verify(&state.tokens) {
                AccessState::Verified(identity_id) => identity_id,
                AccessState::NoToken => {
                    log::debug!("Rejected {}: no bearer token", parts.uri.path());
                    return Err(ApiError::unauthenticated(NO_TOKEN_MESSAGE));
                }
                AccessState::Rejected(e) => {
                    log::warn!("Rejected {} [{}]: {}", parts.uri.path(), e.error_code(), e);
                    return Err(ApiError::unauthenticated(TOKEN_FAILED_MESSAGE));
                }
                AccessState::Verifying(_) => {
                    return Err(ApiError::internal("token verification did not complete"));
                }
            };

            let user = state
                .users()
                .find_public_by_id(identity_id)
                .await?
                .ok_or_else(|| {
                    log::warn!("Valid token for unknown identity {}", identity_id);
                    ApiError::unauthenticated(USER_NOT_FOUND_MESSAGE)
                })?;

            Ok(AuthUser(user))
        }
    }
}
