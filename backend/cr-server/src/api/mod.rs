pub mod error;
pub mod message_response;

pub mod extractors {
    pub mod auth_user;
    pub mod json_body;
}

pub mod auth {
    pub mod auth;
    pub mod auth_response;
    pub mod login_request;
    pub mod register_request;
}

pub mod users {
    pub mod update_profile_request;
    pub mod users;
}

pub mod projects {
    pub mod create_project_request;
    pub mod list_projects_query;
    pub mod project_dto;
    pub mod projects;
    pub mod technologies;
    pub mod update_project_request;
}
