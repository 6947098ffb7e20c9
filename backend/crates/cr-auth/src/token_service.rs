use crate::{AuthError, Claims, Result as AuthErrorResult};

use cr_core::ErrorLocation;

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Fixed token lifetime.
pub const TOKEN_TTL_DAYS: i64 = 30;

/// Issues and verifies HS256 bearer tokens.
///
/// Holds only the immutable signing keys, so verification is a pure
/// computation and a single instance is shared across requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `verify_at`
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::days(TOKEN_TTL_DAYS),
        }
    }

    pub fn issue(&self, identity_id: Uuid) -> AuthErrorResult<String> {
        self.issue_at(identity_id, Utc::now().timestamp())
    }

    /// Sign a token for `identity_id` expiring `TOKEN_TTL_DAYS` after `now`.
    #[track_caller]
    pub fn issue_at(&self, identity_id: Uuid, now: i64) -> AuthErrorResult<String> {
        let claims = Claims::new(identity_id, now, now + self.ttl.num_seconds());

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Resolve a presented token to the identity it was issued for.
    ///
    /// An expired payload fails with `TokenExpired` even when its signature
    /// would not verify.
    #[track_caller]
    pub fn verify_at(&self, token: &str, now: i64) -> AuthErrorResult<Uuid> {
        let token = normalize_token(token);
        let claims = peek_claims(token)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                        AuthError::InvalidSignature {
                            location: ErrorLocation::from(Location::caller()),
                        }
                    }
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// Drop one leading and one trailing double quote left by clients that
/// store the token JSON-encoded.
pub fn normalize_token(token: &str) -> &str {
    let token = token.trim();
    let token = token.strip_prefix('"').unwrap_or(token);
    let token = token.strip_suffix('"').unwrap_or(token);
    token.trim()
}

/// Decode the payload segment without checking the signature.
#[track_caller]
fn peek_claims(token: &str) -> AuthErrorResult<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, signature] = segments.as_slice() else {
        return Err(AuthError::MalformedToken {
            message: format!("expected 3 segments, found {}", segments.len()),
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if signature.is_empty() {
        return Err(AuthError::MalformedToken {
            message: "missing signature segment".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| AuthError::MalformedToken {
            message: format!("payload is not base64url: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    serde_json::from_slice(&bytes).map_err(|e| AuthError::MalformedToken {
        message: format!("payload is not a claims object: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
