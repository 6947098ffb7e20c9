pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{auth_user::AuthUser, json_body::JsonBody},
    message_response::MessageResponse,
    projects::{
        create_project_request::CreateProjectRequest,
        list_projects_query::ListProjectsQuery,
        project_dto::ProjectDto,
        projects::{
            create_project, delete_project, get_project, list_projects, my_projects,
            update_project,
        },
        technologies::Technologies,
        update_project_request::UpdateProjectRequest,
    },
    users::{
        update_profile_request::UpdateProfileRequest,
        users::{get_profile, get_user_by_id, update_profile},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
