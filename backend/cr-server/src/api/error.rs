//! REST API error types
//!
//! Every failure leaves the server as `{message, code, field?}` with a status
//! from a fixed mapping. Detail that could help an attacker (which token
//! check failed, whether an email exists, store errors) stays in the log.

use cr_auth::AuthError;
use cr_core::CoreError;
use cr_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const NO_TOKEN_MESSAGE: &str = "Not authorized, no token";
pub const TOKEN_FAILED_MESSAGE: &str = "Not authorized, token failed";
pub const USER_NOT_FOUND_MESSAGE: &str = "Not authorized, user not found";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const INTERNAL_MESSAGE: &str = "Internal server error";
const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body too large";
const MISSING_JSON_MESSAGE: &str = "Expected a JSON request body (Content-Type: application/json)";
const MALFORMED_JSON_MESSAGE: &str = "Request body is not valid JSON";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable, safe to show verbatim
    pub message: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "CONFLICT")
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Duplicate email or username (400)
    #[error("Conflict on {field}: {message} {location}")]
    Conflict {
        message: String,
        field: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Body over the configured limit (413)
    #[error("Payload too large {location}")]
    PayloadTooLarge { location: ErrorLocation },

    /// Login mismatch; never says which half was wrong (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Missing, invalid or expired token, or unknown identity (401)
    #[error("Unauthenticated: {message} {location}")]
    Unauthenticated {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not the owner (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthenticated(message: &str) -> Self {
        ApiError::Unauthenticated {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: &str) -> Self {
        ApiError::NotFound {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: &str) -> Self {
        ApiError::BadRequest {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: &str, field: &str) -> Self {
        ApiError::Validation {
            message: message.to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(field: &str) -> Self {
        ApiError::Conflict {
            message: conflict_message(field),
            field: field.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Conflict { .. } | ApiError::Validation { .. } | ApiError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials { .. } | ApiError::Unauthenticated { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Internal detail is replaced with a generic message.
    pub fn body(&self) -> ApiErrorBody {
        let (code, message, field) = match self {
            ApiError::Conflict { message, field, .. } => {
                ("CONFLICT", message.clone(), Some(field.clone()))
            }
            ApiError::Validation { message, field, .. } => {
                ("VALIDATION_ERROR", message.clone(), field.clone())
            }
            ApiError::BadRequest { message, .. } => ("BAD_REQUEST", message.clone(), None),
            ApiError::PayloadTooLarge { .. } => (
                "PAYLOAD_TOO_LARGE",
                PAYLOAD_TOO_LARGE_MESSAGE.to_string(),
                None,
            ),
            ApiError::InvalidCredentials { .. } => (
                "INVALID_CREDENTIALS",
                INVALID_CREDENTIALS_MESSAGE.to_string(),
                None,
            ),
            ApiError::Unauthenticated { message, .. } => {
                ("UNAUTHENTICATED", message.clone(), None)
            }
            ApiError::Forbidden { message, .. } => ("FORBIDDEN", message.clone(), None),
            ApiError::NotFound { message, .. } => ("NOT_FOUND", message.clone(), None),
            ApiError::Internal { .. } => ("INTERNAL_ERROR", INTERNAL_MESSAGE.to_string(), None),
        };

        ApiErrorBody {
            message,
            code: code.to_string(),
            field,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        (self.status(), Json(self.body())).into_response()
    }
}

/// "email" -> "Email already exists"
fn conflict_message(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!(
            "{}{} already exists",
            first.to_uppercase(),
            chars.as_str()
        ),
        None => "Resource already exists".to_string(),
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { field, .. } => ApiError::conflict(&field),
            other => {
                log::error!("Database error: {}", other);
                ApiError::internal("Database operation failed")
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingToken { .. } => ApiError::unauthenticated(NO_TOKEN_MESSAGE),
            e if e.is_token_failure() => {
                log::warn!("Token verification failed [{}]: {}", e.error_code(), e);
                ApiError::unauthenticated(TOKEN_FAILED_MESSAGE)
            }
            AuthError::NotOwner { action, .. } => ApiError::Forbidden {
                message: format!("Not authorized to {} this project", action),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidPassword { message, .. } => {
                ApiError::validation(&message, "password")
            }
            other => {
                log::error!("Credential processing failed [{}]: {}", other.error_code(), other);
                ApiError::internal("Credential processing failed")
            }
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidRole { value, .. } => {
                ApiError::validation(&format!("Invalid role '{}'", value), "role")
            }
            CoreError::InvalidProjectType { value, .. } => ApiError::validation(
                &format!(
                    "Invalid project type '{}' (expected Static or Dynamic)",
                    value
                ),
                "projectType",
            ),
            CoreError::Validation { message, .. } => ApiError::Validation {
                message,
                field: None,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::BadRequest {
                message: MISSING_JSON_MESSAGE.to_string(),
                location,
            },
            JsonRejection::JsonSyntaxError(_) => ApiError::BadRequest {
                message: MALFORMED_JSON_MESSAGE.to_string(),
                location,
            },
            // serde names the offending field, e.g. "password: invalid type: integer"
            JsonRejection::JsonDataError(e) => ApiError::Validation {
                message: e.body_text(),
                field: None,
                location,
            },
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                ApiError::PayloadTooLarge { location }
            }
            other => ApiError::BadRequest {
                message: other.body_text(),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
