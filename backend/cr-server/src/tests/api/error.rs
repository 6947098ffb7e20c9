use crate::ApiError;
use crate::api::error::{INVALID_CREDENTIALS_MESSAGE, NO_TOKEN_MESSAGE, TOKEN_FAILED_MESSAGE};

use cr_auth::AuthError;
use cr_core::{CoreError, ErrorLocation};
use cr_db::DbError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use googletest::prelude::*;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_message() {
    let (status, json) = render(ApiError::not_found("Project not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Project not found");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let (status, json) = render(ApiError::validation("Name is required", "name")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn given_conflict_when_rendered_then_400_naming_field() {
    let (status, json) = render(ApiError::conflict("email")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "Email already exists");
    assert_eq!(json["field"], "email");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_detail_is_hidden() {
    let (status, json) = render(ApiError::internal("disk I/O error at sector 7")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Internal server error");
}

#[tokio::test]
async fn given_invalid_credentials_when_rendered_then_401_generic_message() {
    let (status, json) = render(ApiError::invalid_credentials()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], INVALID_CREDENTIALS_MESSAGE);
}

#[test]
fn given_unique_violation_when_converted_then_conflict_on_same_field() {
    let error = ApiError::from(DbError::UniqueViolation {
        field: "username".to_string(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_that!(error.body().message, eq("Username already exists"));
    assert_that!(error.body().field, some(eq("username")));
}

#[test]
fn given_other_db_error_when_converted_then_internal() {
    let error = ApiError::from(DbError::Initialization {
        message: "boom".to_string(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn given_each_token_failure_when_converted_then_same_generic_401() {
    let failures = [
        AuthError::MalformedToken {
            message: "not three segments".to_string(),
            location: here(),
        },
        AuthError::InvalidSignature { location: here() },
        AuthError::TokenExpired { location: here() },
    ];

    for failure in failures {
        let error = ApiError::from(failure);
        assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
        assert_that!(error.body().message, eq(TOKEN_FAILED_MESSAGE));
    }
}

#[test]
fn given_missing_token_when_converted_then_no_token_message() {
    let error = ApiError::from(AuthError::MissingToken { location: here() });

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_that!(error.body().message, eq(NO_TOKEN_MESSAGE));
}

#[test]
fn given_not_owner_when_converted_then_403_naming_action() {
    let error = ApiError::from(AuthError::NotOwner {
        action: "delete".to_string(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::FORBIDDEN);
    assert_that!(error.body().message, eq("Not authorized to delete this project"));
}

#[test]
fn given_invalid_role_when_converted_then_validation_on_role() {
    let error = ApiError::from(CoreError::InvalidRole {
        value: "admin".to_string(),
        location: here(),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_that!(error.body().field, some(eq("role")));
}
