use crate::{Project, ProjectType};

use uuid::Uuid;

#[test]
fn test_project_new() {
    let owner = Uuid::new_v4();
    let project = Project::new(
        owner,
        "Portfolio".to_string(),
        "My personal site".to_string(),
        ProjectType::Static,
        "https://media.example/thumb.png".to_string(),
    );

    assert_eq!(project.owner_id, owner);
    assert_eq!(project.title, "Portfolio");
    assert_eq!(project.project_type, ProjectType::Static);
    assert!(project.technologies.is_empty());
    assert!(project.demo_video.is_none());
    assert_eq!(project.created_at, project.updated_at);
}

#[test]
fn test_project_serializes_with_client_field_names() {
    let owner = Uuid::new_v4();
    let project = Project::new(
        owner,
        "Chat".to_string(),
        "Realtime chat".to_string(),
        ProjectType::Dynamic,
        "thumb".to_string(),
    );

    let json = serde_json_value(&project);

    assert_eq!(json["_id"], project.id.to_string());
    assert_eq!(json["user"], owner.to_string());
    assert_eq!(json["projectType"], "Dynamic");
    assert!(json.get("createdAt").is_some());
}

fn serde_json_value<T: serde::Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap()
}
