use crate::Technologies;

use serde::Deserialize;

/// Partial update. Absent or empty fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub technologies: Option<Technologies>,

    #[serde(default)]
    pub project_type: Option<String>,

    #[serde(default)]
    pub github_link: Option<String>,

    #[serde(default)]
    pub live_link: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub demo_video: Option<String>,
}
