use serde::Deserialize;

/// Query parameters for listing projects
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsQuery {
    /// Case-insensitive title substring
    pub keyword: Option<String>,
}
