use crate::api::error::{NO_TOKEN_MESSAGE, TOKEN_FAILED_MESSAGE, USER_NOT_FOUND_MESSAGE};
use crate::{AppState, AuthUser};

use cr_auth::{PasswordHasher, TokenService};
use cr_core::User;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode, header::AUTHORIZATION},
};
use uuid::Uuid;

const SECRET: &[u8] = b"extractor-test-secret-32-bytes-long";

async fn create_test_state() -> AppState {
    let pool = cr_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState::new(
        pool,
        TokenService::with_hs256(SECRET),
        PasswordHasher::new(4),
        1024 * 1024,
    )
}

async fn extract(state: &AppState, authorization: Option<&str>) -> Result<AuthUser, crate::ApiError> {
    let mut builder = Request::builder().uri("/api/users/profile");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();

    AuthUser::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn given_no_header_when_extracted_then_no_token_401() {
    let state = create_test_state().await;

    let error = extract(&state, None).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error.body().message, NO_TOKEN_MESSAGE);
}

#[tokio::test]
async fn given_non_bearer_scheme_when_extracted_then_no_token_401() {
    let state = create_test_state().await;

    let error = extract(&state, Some("Basic dXNlcjpwYXNz")).await.unwrap_err();

    assert_eq!(error.body().message, NO_TOKEN_MESSAGE);
}

#[tokio::test]
async fn given_garbage_token_when_extracted_then_token_failed_401() {
    let state = create_test_state().await;

    let error = extract(&state, Some("Bearer not-a-jwt")).await.unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error.body().message, TOKEN_FAILED_MESSAGE);
}

#[tokio::test]
async fn given_valid_token_for_unknown_identity_when_extracted_then_user_not_found_401() {
    let state = create_test_state().await;
    let token = state.tokens.issue(Uuid::new_v4()).unwrap();

    let error = extract(&state, Some(&format!("Bearer {}", token)))
        .await
        .unwrap_err();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(error.body().message, USER_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn given_valid_token_for_stored_user_when_extracted_then_yields_public_user() {
    let state = create_test_state().await;
    let user = User::new(
        "Ada".to_string(),
        "ada@example.com".to_string(),
        None,
        "$2b$04$abcdefghijklmnopqrstuuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ01".to_string(),
    );
    state.users().create(&user).await.unwrap();
    let token = state.tokens.issue(user.id).unwrap();

    let AuthUser(public) = extract(&state, Some(&format!("Bearer \"{}\"", token)))
        .await
        .unwrap();

    assert_eq!(public.id, user.id);
    assert_eq!(public.email, "ada@example.com");
    assert_eq!(public.username.as_deref(), Some("ada"));
}
