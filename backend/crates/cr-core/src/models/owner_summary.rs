use serde::Serialize;
use uuid::Uuid;

/// Owner details joined onto a project for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    /// Only populated for single-project views
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub avatar: Option<String>,
}
