//! Project REST API handlers
//!
//! Reads are public. Writes require an authenticated caller, and update and
//! delete additionally require that the caller owns the project.

use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateProjectRequest, JsonBody, ListProjectsQuery,
    MessageResponse, ProjectDto, UpdateProjectRequest,
};

use cr_auth::ensure_owner;
use cr_core::{Project, ProjectType};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

const PROJECT_NOT_FOUND: &str = "Project not found";
const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in required fields (including thumbnail)";

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects?keyword=
///
/// All projects, newest first, optionally filtered by title
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state.projects().search(query.keyword.as_deref()).await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /api/projects/myprojects
pub async fn my_projects(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<Vec<ProjectDto>>> {
    let projects = state.projects().find_by_owner(user.id).await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /api/projects/{id}
///
/// Single project with the owner's email included
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = parse_project_id(&id)?;

    let listing = state
        .projects()
        .find_with_owner(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    Ok(Json(ProjectDto::from(listing)))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(req): JsonBody<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<Project>)> {
    let title = req.title.trim();
    let description = req.description.trim();
    let project_type = req.project_type.trim();
    let thumbnail = req.thumbnail.trim();

    if [title, description, project_type, thumbnail]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ApiError::bad_request(REQUIRED_FIELDS_MESSAGE));
    }

    let project_type = ProjectType::from_str(project_type)?;

    let mut project = Project::new(
        user.id,
        title.to_string(),
        description.to_string(),
        project_type,
        thumbnail.to_string(),
    );
    project.technologies = req
        .technologies
        .and_then(|t| t.into_vec())
        .unwrap_or_default();
    project.github_link = non_empty(req.github_link);
    project.live_link = non_empty(req.live_link);
    project.demo_video = non_empty(req.demo_video);

    state.projects().create(&project).await?;

    info!("User {} created project {}", user.id, project.id);

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/{id}
///
/// Owner only. Fields left out or sent empty keep their current values.
pub async fn update_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateProjectRequest>,
) -> ApiResult<Json<Project>> {
    let project_id = parse_project_id(&id)?;
    let repo = state.projects();

    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    ensure_owner(user.id, project.owner_id, "update")?;

    if let Some(title) = non_empty(req.title) {
        project.title = title;
    }
    if let Some(description) = non_empty(req.description) {
        project.description = description;
    }
    if let Some(technologies) = req.technologies.and_then(|t| t.into_vec()) {
        project.technologies = technologies;
    }
    if let Some(project_type) = non_empty(req.project_type) {
        project.project_type = ProjectType::from_str(&project_type)?;
    }
    if let Some(github_link) = non_empty(req.github_link) {
        project.github_link = Some(github_link);
    }
    if let Some(live_link) = non_empty(req.live_link) {
        project.live_link = Some(live_link);
    }
    if let Some(thumbnail) = non_empty(req.thumbnail) {
        project.thumbnail = thumbnail;
    }
    if let Some(demo_video) = non_empty(req.demo_video) {
        project.demo_video = Some(demo_video);
    }
    project.updated_at = Utc::now();

    // The write is scoped to the owner; zero rows means it vanished meanwhile
    if !repo.update(&project).await? {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }

    Ok(Json(project))
}

/// DELETE /api/projects/{id}
///
/// Owner only
pub async fn delete_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let project_id = parse_project_id(&id)?;
    let repo = state.projects();

    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    ensure_owner(user.id, project.owner_id, "delete")?;

    if !repo.delete(project.id, user.id).await? {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }

    info!("User {} deleted project {}", user.id, project.id);

    Ok(Json(MessageResponse::new("Project removed")))
}

// =============================================================================
// Helpers
// =============================================================================

/// Ids that cannot name a project are simply not found
fn parse_project_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found(PROJECT_NOT_FOUND))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
