//! Per-request authentication state.
//!
//! A request starts as either [`AccessState::NoToken`] or
//! [`AccessState::Verifying`] depending on its `Authorization` header, and
//! [`AccessState::verify`] moves it to exactly one terminal state. Callers
//! produce a single response from that terminal state.

use crate::{AuthError, Result as AuthErrorResult, TokenService};

use cr_core::ErrorLocation;

use std::panic::Location;

use uuid::Uuid;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug)]
pub enum AccessState {
    /// No usable bearer credential on the request
    NoToken,
    /// Bearer credential extracted, not yet checked
    Verifying(String),
    /// Token checked; carries the identity it was issued for
    Verified(Uuid),
    /// Token presented but failed verification
    Rejected(AuthError),
}

impl AccessState {
    /// Classify a raw `Authorization` header value.
    ///
    /// Anything other than `Bearer <token>` with a non-empty token counts as
    /// no token at all.
    pub fn from_authorization(header: Option<&str>) -> Self {
        match header
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
        {
            Some(token) if !token.is_empty() => Self::Verifying(token.to_string()),
            _ => Self::NoToken,
        }
    }

    pub fn verify(self, tokens: &TokenService) -> Self {
        match self {
            Self::Verifying(token) => match tokens.verify(&token) {
                Ok(identity_id) => Self::Verified(identity_id),
                Err(e) => Self::Rejected(e),
            },
            terminal => terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Verifying(_))
    }

    #[track_caller]
    pub fn into_identity(self) -> AuthErrorResult<Uuid> {
        match self {
            Self::Verified(identity_id) => Ok(identity_id),
            Self::Rejected(e) => Err(e),
            Self::NoToken => Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            }),
            Self::Verifying(_) => Err(AuthError::MalformedToken {
                message: "token was never verified".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
