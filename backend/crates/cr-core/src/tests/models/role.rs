use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_default_is_student() {
    assert_eq!(Role::default(), Role::Student);
}

#[test]
fn test_role_from_str_accepts_any_case() {
    assert_eq!(Role::from_str("Mentor").unwrap(), Role::Mentor);
    assert_eq!(Role::from_str(" alumni ").unwrap(), Role::Alumni);
}

#[test]
fn test_role_from_str_rejects_unknown_value() {
    let result = Role::from_str("admin");

    assert!(matches!(result, Err(CoreError::InvalidRole { value, .. }) if value == "admin"));
}
