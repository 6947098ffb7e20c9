use crate::{AccessState, AuthError, TokenService};

use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

#[test]
fn given_no_header_when_classified_then_no_token() {
    assert!(matches!(
        AccessState::from_authorization(None),
        AccessState::NoToken
    ));
}

#[test]
fn given_non_bearer_scheme_when_classified_then_no_token() {
    assert!(matches!(
        AccessState::from_authorization(Some("Basic YWxhZGRpbjpvcGVu")),
        AccessState::NoToken
    ));
    assert!(matches!(
        AccessState::from_authorization(Some("bearer abc.def.ghi")),
        AccessState::NoToken
    ));
}

#[test]
fn given_bearer_without_token_when_classified_then_no_token() {
    assert!(matches!(
        AccessState::from_authorization(Some("Bearer ")),
        AccessState::NoToken
    ));
    assert!(matches!(
        AccessState::from_authorization(Some("Bearer    ")),
        AccessState::NoToken
    ));
}

#[test]
fn given_bearer_token_when_classified_then_verifying() {
    let state = AccessState::from_authorization(Some("Bearer abc.def.ghi"));

    assert!(matches!(state, AccessState::Verifying(ref t) if t == "abc.def.ghi"));
    assert!(!state.is_terminal());
}

#[test]
fn given_valid_token_when_verified_then_reaches_verified() {
    let tokens = TokenService::with_hs256(SECRET);
    let identity = Uuid::new_v4();
    let header = format!("Bearer {}", tokens.issue(identity).unwrap());

    let state = AccessState::from_authorization(Some(&header)).verify(&tokens);

    assert!(state.is_terminal());
    assert_eq!(state.into_identity().unwrap(), identity);
}

#[test]
fn given_bad_token_when_verified_then_reaches_rejected() {
    let tokens = TokenService::with_hs256(SECRET);

    let state = AccessState::from_authorization(Some("Bearer garbage")).verify(&tokens);

    assert!(matches!(
        state,
        AccessState::Rejected(AuthError::MalformedToken { .. })
    ));
    assert!(state.is_terminal());
}

#[test]
fn given_no_token_when_verified_then_stays_no_token_and_fails_closed() {
    let tokens = TokenService::with_hs256(SECRET);

    let state = AccessState::from_authorization(None).verify(&tokens);

    assert!(matches!(state, AccessState::NoToken));
    assert!(matches!(
        state.into_identity(),
        Err(AuthError::MissingToken { .. })
    ));
}

#[test]
fn given_unverified_state_when_converted_then_fails_closed() {
    let state = AccessState::Verifying("abc.def.ghi".to_string());

    assert!(state.into_identity().is_err());
}
