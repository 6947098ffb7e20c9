use crate::{ApiError, JsonBody};

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

async fn extract(content_type: Option<&str>, body: &str) -> Result<JsonBody<Credentials>, ApiError> {
    let mut builder = Request::builder().method("POST").uri("/api/auth/login");
    if let Some(value) = content_type {
        builder = builder.header(CONTENT_TYPE, value);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    JsonBody::<Credentials>::from_request(request, &()).await
}

#[tokio::test]
async fn given_well_formed_body_when_extracted_then_fields_are_deserialized() {
    let JsonBody(credentials) = extract(
        Some("application/json"),
        r#"{"email":"a@x.com","password":"pw1234"}"#,
    )
    .await
    .unwrap();

    assert_eq!(credentials.email, "a@x.com");
    assert_eq!(credentials.password, "pw1234");
}

#[tokio::test]
async fn given_no_content_type_when_extracted_then_400_bad_request() {
    let error = extract(None, "").await.unwrap_err();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.body().code, "BAD_REQUEST");
    assert!(error.body().message.contains("application/json"));
}

#[tokio::test]
async fn given_broken_json_when_extracted_then_400_bad_request() {
    let error = extract(Some("application/json"), r#"{"email":"#)
        .await
        .unwrap_err();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.body().code, "BAD_REQUEST");
}

#[tokio::test]
async fn given_badly_typed_field_when_extracted_then_400_validation_naming_it() {
    let error = extract(
        Some("application/json"),
        r#"{"email":"a@x.com","password":1234}"#,
    )
    .await
    .unwrap_err();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error.body().code, "VALIDATION_ERROR");
    assert!(error.body().message.contains("password"));
}
