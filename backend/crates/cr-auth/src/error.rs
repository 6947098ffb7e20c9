use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signature mismatch {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing bearer token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid password: {message} {location}")]
    InvalidPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not authorized to {action} this project {location}")]
    NotOwner {
        action: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::Signing { .. } => "TOKEN_SIGNING_FAILED",
            Self::Hashing { .. } => "PASSWORD_HASHING_FAILED",
            Self::InvalidPassword { .. } => "INVALID_PASSWORD",
            Self::NotOwner { .. } => "FORBIDDEN",
        }
    }

    /// True for the failures a presented bearer token can produce.
    pub fn is_token_failure(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken { .. }
                | Self::InvalidSignature { .. }
                | Self::TokenExpired { .. }
                | Self::MissingToken { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
