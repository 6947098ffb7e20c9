use cr_core::{Project, ProjectType, User};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Current time truncated to the millisecond precision the store keeps
pub fn now_millis() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(Utc::now().timestamp_millis()).unwrap()
}

/// Creates a test User whose username is derived from `email`.
///
/// The hash is a placeholder; repository tests never verify it.
pub fn create_test_user(email: &str) -> User {
    let mut user = User::new(
        "Test User".to_string(),
        email.to_string(),
        None,
        "$2b$04$placeholderplaceholderplaceholderplaceholderplace".to_string(),
    );
    user.created_at = now_millis();
    user.updated_at = user.created_at;
    user
}

/// Creates a test Project with sensible defaults
pub fn create_test_project(owner_id: Uuid, title: &str) -> Project {
    let mut project = Project::new(
        owner_id,
        title.to_string(),
        "Test project description".to_string(),
        ProjectType::Dynamic,
        "https://media.example/thumb.png".to_string(),
    );
    project.technologies = vec!["Rust".to_string(), "SQLite".to_string()];
    project.created_at = now_millis();
    project.updated_at = project.created_at;
    project
}

/// Creates a test Project created `minutes_ago` minutes in the past
pub fn create_test_project_at(owner_id: Uuid, title: &str, minutes_ago: i64) -> Project {
    let mut project = create_test_project(owner_id, title);
    let at = now_millis() - Duration::minutes(minutes_ago);
    project.created_at = at;
    project.updated_at = at;
    project
}
