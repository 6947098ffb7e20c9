//! Project entity - a showcased student project.

use crate::ProjectType;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A project posting. `owner_id` is fixed at creation and never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "user")]
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub project_type: ProjectType,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    /// Opaque media URL
    pub thumbnail: String,
    /// Opaque media URL
    pub demo_video: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project owned by `owner_id`
    pub fn new(
        owner_id: Uuid,
        title: String,
        description: String,
        project_type: ProjectType,
        thumbnail: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            technologies: Vec::new(),
            project_type,
            github_link: None,
            live_link: None,
            thumbnail,
            demo_video: None,
            created_at: now,
            updated_at: now,
        }
    }
}
