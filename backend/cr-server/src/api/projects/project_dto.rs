use cr_core::{OwnerSummary, Project, ProjectType};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Project with its owner joined in, as returned by the read endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user: OwnerSummary,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub project_type: ProjectType,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub thumbnail: String,
    pub demo_video: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(Project, OwnerSummary)> for ProjectDto {
    fn from((p, owner): (Project, OwnerSummary)) -> Self {
        Self {
            id: p.id,
            user: owner,
            title: p.title,
            description: p.description,
            technologies: p.technologies,
            project_type: p.project_type,
            github_link: p.github_link,
            live_link: p.live_link,
            thumbnail: p.thumbnail,
            demo_video: p.demo_video,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
