use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token payload. The field is named `id` so tokens issued by earlier
/// deployments keep decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the token was issued for
    pub id: String,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expiration (Unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(id: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            id: id.to_string(),
            iat,
            exp,
        }
    }

    /// Parse the identity out of a payload whose signature has been checked.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.id).map_err(|e| AuthError::MalformedToken {
            message: format!("claim 'id' is not a valid identifier: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
