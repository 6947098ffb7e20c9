use crate::{Role, User, default_username};

#[test]
fn test_default_username_is_local_part() {
    assert_eq!(default_username("a@x.com"), "a");
    assert_eq!(default_username("first.last@uni.edu"), "first.last");
}

#[test]
fn test_default_username_uses_first_at_sign() {
    assert_eq!(default_username("odd@name@x.com"), "odd");
}

#[test]
fn test_user_new_derives_username_when_missing() {
    let user = User::new(
        "Ann".to_string(),
        "a@x.com".to_string(),
        None,
        "$2b$04$hash".to_string(),
    );

    assert_eq!(user.username.as_deref(), Some("a"));
    assert_eq!(user.role, Role::Student);
}

#[test]
fn test_user_new_treats_blank_username_as_missing() {
    let user = User::new(
        "Ann".to_string(),
        "ann@x.com".to_string(),
        Some("  ".to_string()),
        "$2b$04$hash".to_string(),
    );

    assert_eq!(user.username.as_deref(), Some("ann"));
}

#[test]
fn test_user_new_keeps_explicit_username() {
    let user = User::new(
        "Ann".to_string(),
        "a@x.com".to_string(),
        Some("annie".to_string()),
        "$2b$04$hash".to_string(),
    );

    assert_eq!(user.username.as_deref(), Some("annie"));
}

#[test]
fn test_public_projection_has_no_password_hash() {
    let user = User::new(
        "Ann".to_string(),
        "a@x.com".to_string(),
        None,
        "$2b$04$secret-hash".to_string(),
    );

    let json = serde_json::to_value(user.to_public()).unwrap();

    assert_eq!(json["_id"], user.id.to_string());
    assert_eq!(json["role"], "student");
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
    assert!(!json.to_string().contains("secret-hash"));
}
