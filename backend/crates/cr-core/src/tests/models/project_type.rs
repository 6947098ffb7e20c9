use crate::{CoreError, ProjectType};

use std::str::FromStr;

#[test]
fn test_project_type_round_trips_through_str() {
    for pt in [ProjectType::Static, ProjectType::Dynamic] {
        assert_eq!(ProjectType::from_str(pt.as_str()).unwrap(), pt);
    }
}

#[test]
fn test_project_type_is_case_sensitive() {
    let result = ProjectType::from_str("static");

    assert!(matches!(result, Err(CoreError::InvalidProjectType { .. })));
}
