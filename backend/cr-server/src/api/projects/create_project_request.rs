use crate::Technologies;

use serde::Deserialize;

/// Required fields default to empty so a missing one surfaces as a
/// "required fields" error instead of a JSON rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub technologies: Option<Technologies>,

    /// "Static" or "Dynamic"
    #[serde(default)]
    pub project_type: String,

    #[serde(default)]
    pub github_link: Option<String>,

    #[serde(default)]
    pub live_link: Option<String>,

    /// Media URL
    #[serde(default)]
    pub thumbnail: String,

    /// Media URL
    #[serde(default)]
    pub demo_video: Option<String>,
}
